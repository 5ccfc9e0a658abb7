//! Constants used throughout the application
//!
//! This module centralizes magic strings, translation msgids and default
//! values so the dialog, the API client and the config share one source.

// Translation contexts
pub const CONTEXT_TITLE: &str = "Title";
pub const CONTEXT_LABEL_MODAL: &str = "Label modal";
pub const CONTEXT_ERROR_LABEL_MODAL: &str = "Error label modal";

// Dialog titles
pub const MSG_EDIT_FOLDER: &str = "Edit folder";
pub const MSG_EDIT_LABEL: &str = "Edit label";
pub const MSG_CREATE_NEW_FOLDER: &str = "Create new folder";
pub const MSG_CREATE_NEW_LABEL: &str = "Create new label";

// Success Messages
pub const MSG_FOLDER_UPDATED: &str = "Folder updated";
pub const MSG_LABEL_UPDATED: &str = "Label updated";
pub const MSG_FOLDER_CREATED: &str = "Folder created";
pub const MSG_LABEL_CREATED: &str = "Label created";

// Error Messages
pub const MSG_ERROR_SAVING: &str = "Error when saving label";
pub const MSG_ERROR_FOLDER_NAME: &str = "Invalid folder name";
pub const MSG_ERROR_LABEL_NAME: &str = "Invalid label name";

// Form constraints
pub const NAME_MAX_LENGTH: usize = 100;

/// Swatches offered by the color picker when the config does not override them
pub const DEFAULT_PALETTE: [&str; 20] = [
    "#7272a7", "#cf5858", "#c26cc7", "#7569d1", "#69a9d1", "#5ec7b7", "#72bb75", "#c3d261", "#e6c04c", "#e6984c",
    "#8989ac", "#cf7e7e", "#c793ca", "#9b94d1", "#a8c4d5", "#97c9c1", "#9db99f", "#c6cd97", "#e7d292", "#dfb286",
];

// Wire protocol
pub const API_CODE_SUCCESS: i64 = 1000;
pub const HEADER_UID: &str = "x-pm-uid";
pub const HEADER_APP_VERSION: &str = "x-pm-appversion";
/// Upper bound on `More: 1` follow-ups during a single refresh
pub const EVENT_MAX_PAGES: usize = 10;

// Config defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_TOKEN_ENV: &str = "MAIL_API_TOKEN";
pub const DEFAULT_UID_ENV: &str = "MAIL_API_UID";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const MAX_TIMEOUT_SECS: u64 = 300;
pub const MAX_FOCUS_DELAY_MS: u64 = 1000;
pub const DEFAULT_TOAST_TTL_SECS: u64 = 4;
pub const MAX_TOAST_TTL_SECS: u64 = 60;

// File names
pub const APP_DIR_NAME: &str = "mail-labels";
pub const LOCAL_CONFIG_FILE: &str = "mail-labels.toml";
pub const LOG_FILE_NAME: &str = "mail-labels.log";

// Status text
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration";
pub const STATUS_SAVING: &str = "🔄 Saving...";
pub const STATUS_HINT: &str = "Tab: next field • Enter: save • Esc: cancel";

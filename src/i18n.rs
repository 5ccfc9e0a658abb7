//! Translation catalog and the strings used by the label dialog.

use crate::constants::*;
use crate::label::{LabelKind, ModalMode};
use std::collections::HashMap;
use std::path::Path;

/// Errors raised while loading a translation catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Looks up a translated string by msgid and gettext-style context.
pub trait Catalog: Send + Sync {
    fn get_string(&self, msgid: &str, context: &str) -> String;
}

/// Catalog that returns every msgid untranslated.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceCatalog;

impl Catalog for SourceCatalog {
    fn get_string(&self, msgid: &str, _context: &str) -> String {
        msgid.to_string()
    }
}

/// Catalog read from a TOML file with one table per context:
///
/// ```toml
/// [Title]
/// "Edit folder" = "Modifier le dossier"
/// ```
#[derive(Debug, Clone, Default)]
pub struct TomlCatalog {
    entries: HashMap<String, HashMap<String, String>>,
}

impl TomlCatalog {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let entries = toml::from_str(content)?;
        Ok(Self { entries })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let display = path.as_ref().display().to_string();
        let content = std::fs::read_to_string(&path).map_err(|source| CatalogError::Read {
            path: display.clone(),
            source,
        })?;
        Self::parse(&content).map_err(|source| CatalogError::Parse { path: display, source })
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Catalog for TomlCatalog {
    fn get_string(&self, msgid: &str, context: &str) -> String {
        self.entries
            .get(context)
            .and_then(|table| table.get(msgid))
            .filter(|translated| !translated.is_empty())
            .cloned()
            .unwrap_or_else(|| msgid.to_string())
    }
}

/// Every user-visible string of the label dialog, resolved once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalTexts {
    pub edit_folder: String,
    pub edit_label: String,
    pub create_new_folder: String,
    pub create_new_label: String,
    pub folder_updated: String,
    pub label_updated: String,
    pub folder_created: String,
    pub label_created: String,
    pub error_message: String,
    pub error_folder_name: String,
    pub error_label_name: String,
}

impl ModalTexts {
    pub fn resolve(catalog: &dyn Catalog) -> Self {
        Self {
            edit_folder: catalog.get_string(MSG_EDIT_FOLDER, CONTEXT_TITLE),
            edit_label: catalog.get_string(MSG_EDIT_LABEL, CONTEXT_TITLE),
            create_new_folder: catalog.get_string(MSG_CREATE_NEW_FOLDER, CONTEXT_TITLE),
            create_new_label: catalog.get_string(MSG_CREATE_NEW_LABEL, CONTEXT_TITLE),
            folder_updated: catalog.get_string(MSG_FOLDER_UPDATED, CONTEXT_LABEL_MODAL),
            label_updated: catalog.get_string(MSG_LABEL_UPDATED, CONTEXT_LABEL_MODAL),
            folder_created: catalog.get_string(MSG_FOLDER_CREATED, CONTEXT_LABEL_MODAL),
            label_created: catalog.get_string(MSG_LABEL_CREATED, CONTEXT_LABEL_MODAL),
            error_message: catalog.get_string(MSG_ERROR_SAVING, CONTEXT_ERROR_LABEL_MODAL),
            error_folder_name: catalog.get_string(MSG_ERROR_FOLDER_NAME, CONTEXT_ERROR_LABEL_MODAL),
            error_label_name: catalog.get_string(MSG_ERROR_LABEL_NAME, CONTEXT_ERROR_LABEL_MODAL),
        }
    }

    pub fn title(&self, mode: ModalMode, kind: LabelKind) -> &str {
        match (mode, kind) {
            (ModalMode::Edit, LabelKind::Folder) => &self.edit_folder,
            (ModalMode::Edit, LabelKind::Label) => &self.edit_label,
            (ModalMode::Create, LabelKind::Folder) => &self.create_new_folder,
            (ModalMode::Create, LabelKind::Label) => &self.create_new_label,
        }
    }

    pub fn success(&self, mode: ModalMode, kind: LabelKind) -> &str {
        match (mode, kind) {
            (ModalMode::Edit, LabelKind::Folder) => &self.folder_updated,
            (ModalMode::Edit, LabelKind::Label) => &self.label_updated,
            (ModalMode::Create, LabelKind::Folder) => &self.folder_created,
            (ModalMode::Create, LabelKind::Label) => &self.label_created,
        }
    }

    pub fn invalid_name(&self, kind: LabelKind) -> &str {
        match kind {
            LabelKind::Folder => &self.error_folder_name,
            LabelKind::Label => &self.error_label_name,
        }
    }
}

impl Default for ModalTexts {
    fn default() -> Self {
        Self::resolve(&SourceCatalog)
    }
}

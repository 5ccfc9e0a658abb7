//! Configuration management for mail-labels
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::*;
use crate::modal::form::is_swatch;
use crate::palette::Palette;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub palette: PaletteConfig,
    pub i18n: I18nConfig,
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API root URL
    pub base_url: String,
    /// Environment variable holding the bearer token
    pub token_env: String,
    /// Environment variable holding the session UID (optional at runtime)
    pub uid_env: String,
    /// Value sent in the app version header
    pub app_version: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Delay before the name field takes focus (0 = immediately on mount)
    pub focus_delay_ms: u64,
    /// How long a toast stays in the status line
    pub toast_ttl_secs: u64,
}

/// Color picker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Swatches offered by the picker, in display order
    pub colors: Vec<String>,
}

/// Translation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct I18nConfig {
    /// TOML catalog with one table per context; untranslated when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            uid_env: DEFAULT_UID_ENV.to_string(),
            app_version: format!("{}@{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            focus_delay_ms: 0,
            toast_ttl_secs: DEFAULT_TOAST_TTL_SECS,
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            anyhow::bail!("api.base_url cannot be empty");
        }
        if self.api.token_env.trim().is_empty() {
            anyhow::bail!("api.token_env cannot be empty");
        }
        if self.api.timeout_secs == 0 || self.api.timeout_secs > MAX_TIMEOUT_SECS {
            anyhow::bail!(
                "api.timeout_secs must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECS,
                self.api.timeout_secs
            );
        }

        if self.ui.focus_delay_ms > MAX_FOCUS_DELAY_MS {
            anyhow::bail!("ui.focus_delay_ms cannot exceed {} ms", MAX_FOCUS_DELAY_MS);
        }
        if self.ui.toast_ttl_secs == 0 || self.ui.toast_ttl_secs > MAX_TOAST_TTL_SECS {
            anyhow::bail!(
                "ui.toast_ttl_secs must be between 1 and {}, got {}",
                MAX_TOAST_TTL_SECS,
                self.ui.toast_ttl_secs
            );
        }

        if self.palette.colors.is_empty() {
            anyhow::bail!("palette.colors cannot be empty");
        }
        if let Some(bad) = self.palette.colors.iter().find(|c| !is_swatch(c)) {
            anyhow::bail!("Invalid palette color '{}': expected #rgb or #rrggbb", bad);
        }

        Ok(())
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.colors.clone())
    }

    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.ui.focus_delay_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_secs(self.ui.toast_ttl_secs)
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# mail-labels Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

//! Application configuration via `kvpay.toml`
//!
//! The only setting is the application name, which doubles as the
//! namespace every account key lives under.

use kvpay_core::types::Namespace;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::app::DEFAULT_APP_NAME;

/// Config file name used by [`PaymentAppConfig::write_default_if_missing`] callers.
pub const CONFIG_FILE_NAME: &str = "kvpay.toml";

/// Errors from loading or writing configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed
    #[error("Failed to access config file '{path}': {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this config
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Serializing the config failed
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// `app_name` is empty or whitespace
    #[error("Invalid app_name '{0}': must not be empty")]
    InvalidAppName(String),
}

/// Payment application configuration loaded from `kvpay.toml`.
///
/// # Example
///
/// ```toml
/// # Namespace for all account keys
/// app_name = "PaymentApp"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAppConfig {
    /// Application name; every account key is stored under this namespace.
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

impl Default for PaymentAppConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
        }
    }
}

impl PaymentAppConfig {
    /// Namespace derived from `app_name`
    pub fn namespace(&self) -> Namespace {
        Namespace::new(self.app_name.clone())
    }

    /// Reject configs the application cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::InvalidAppName(self.app_name.clone()));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# kvpay configuration
#
# Application name. Every account key is stored under this namespace,
# so two apps with different names never see each other's balances.
app_name = "PaymentApp"
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PaymentAppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<(), ConfigError> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

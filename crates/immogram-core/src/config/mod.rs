mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ImmogramError;
use defaults::*;

/// Top-level Immogram configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub immogram: ImmogramConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
}

/// General bot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImmogramConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ImmogramConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
        }
    }
}

/// Message rendering -- which locales are served and where catalogs live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// Locale used when a chat has not picked one.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Locales loaded at startup, one message service each.
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    /// Directory with `<locale>.toml` files replacing the bundled catalogs.
    #[serde(default)]
    pub catalog_dir: Option<String>,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            locales: default_locales(),
            catalog_dir: None,
        }
    }
}

impl MessagesConfig {
    /// `catalog_dir` with `~/` expanded.
    pub fn catalog_dir(&self) -> Option<String> {
        self.catalog_dir.as_deref().map(shellexpand)
    }

    /// Check that the default locale is among the loaded ones.
    pub fn validate(&self) -> Result<(), ImmogramError> {
        if self.locales.is_empty() {
            return Err(ImmogramError::Config(
                "messages.locales must name at least one locale".into(),
            ));
        }
        if !self.locales.contains(&self.default_locale) {
            return Err(ImmogramError::Config(format!(
                "default locale '{}' is not listed in messages.locales {:?}",
                self.default_locale, self.locales
            )));
        }
        Ok(())
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, ImmogramError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ImmogramError::Config(format!("failed to read {}: {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| ImmogramError::Config(format!("failed to parse config: {}", e)))?;

    config.messages.validate()?;
    Ok(config)
}

//! Locale-scoped message catalogs.
//!
//! A catalog is a TOML document with a `formatting` locale name (used for
//! month and weekday names) and a flat `[messages]` table of key → pattern.
//! English and German are compiled in; a catalog directory may supply
//! `<tag>.toml` files that replace them.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

use immogram_core::error::{ImmogramError, MissingKeyError};

/// Bundled catalogs, embedded at compile time.
const BUNDLED: &[(&str, &str)] = &[
    ("en", include_str!("../../../locales/en.toml")),
    ("de", include_str!("../../../locales/de.toml")),
];

/// Opaque locale identifier, e.g. `en` or `de`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// TOML structure of a catalog file.
#[derive(Deserialize)]
struct CatalogFile {
    formatting: String,
    messages: HashMap<String, String>,
}

/// Immutable key → pattern mapping for one locale.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: Locale,
    formatting: chrono::Locale,
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Parse a catalog document for `locale`.
    pub fn from_toml(locale: Locale, source: &str) -> Result<Self, ImmogramError> {
        let file: CatalogFile = toml::from_str(source).map_err(|e| {
            ImmogramError::Catalog(format!("failed to parse catalog '{locale}': {e}"))
        })?;
        let formatting = chrono::Locale::try_from(file.formatting.as_str()).map_err(|_| {
            ImmogramError::Catalog(format!(
                "catalog '{locale}' names unknown formatting locale '{}'",
                file.formatting
            ))
        })?;
        debug!(
            "i18n: parsed catalog '{locale}' ({} keys, formatting {})",
            file.messages.len(),
            file.formatting
        );
        Ok(Self {
            locale,
            formatting,
            entries: file.messages,
        })
    }

    /// The compiled-in catalog for `locale`.
    pub fn bundled(locale: &Locale) -> Result<Self, ImmogramError> {
        let (_, source) = BUNDLED
            .iter()
            .find(|(tag, _)| *tag == locale.tag())
            .ok_or_else(|| {
                ImmogramError::Catalog(format!(
                    "no bundled catalog for locale '{locale}' (available: {})",
                    bundled_locales().join(", ")
                ))
            })?;
        Self::from_toml(locale.clone(), source)
    }

    /// Load `dir/<tag>.toml` if present, otherwise the bundled catalog.
    ///
    /// A catalog file replaces the bundled one as a whole; keys are not merged.
    pub fn load(locale: &Locale, dir: Option<&Path>) -> Result<Self, ImmogramError> {
        if let Some(dir) = dir {
            let path = dir.join(format!("{}.toml", locale.tag()));
            if path.exists() {
                let source = std::fs::read_to_string(&path).map_err(|e| {
                    ImmogramError::Catalog(format!("failed to read {}: {e}", path.display()))
                })?;
                info!("i18n: using catalog {}", path.display());
                return Self::from_toml(locale.clone(), &source);
            }
        }
        Self::bundled(locale)
    }

    /// Pattern stored under `key`.
    pub fn get(&self, key: &str) -> Result<&str, MissingKeyError> {
        self.entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| MissingKeyError {
                locale: self.locale.to_string(),
                key: key.to_string(),
            })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Locale used for month and weekday names.
    pub fn formatting_locale(&self) -> chrono::Locale {
        self.formatting
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tags of the compiled-in catalogs.
pub fn bundled_locales() -> Vec<&'static str> {
    BUNDLED.iter().map(|(tag, _)| *tag).collect()
}

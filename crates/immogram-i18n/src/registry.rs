//! Process-wide set of message services, one per active locale.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::catalog::Locale;
use crate::service::MessageService;
use immogram_core::config::MessagesConfig;
use immogram_core::error::ImmogramError;

/// Shared, read-only message services keyed by locale.
#[derive(Debug, Clone)]
pub struct MessageRegistry {
    services: BTreeMap<Locale, Arc<MessageService>>,
    default: Arc<MessageService>,
}

impl MessageRegistry {
    /// Build and verify a service for every configured locale.
    ///
    /// Fails on the first locale whose catalog is unusable.
    pub fn from_config(cfg: &MessagesConfig) -> Result<Self, ImmogramError> {
        cfg.validate()?;
        let dir = cfg.catalog_dir().map(PathBuf::from);

        let mut services = BTreeMap::new();
        for tag in &cfg.locales {
            let locale = Locale::new(tag.as_str());
            let service = MessageService::load(&locale, dir.as_deref())?;
            info!(
                "i18n: locale '{locale}' ready ({} keys)",
                service.catalog().len()
            );
            services.insert(locale, Arc::new(service));
        }

        let default_locale = Locale::new(cfg.default_locale.as_str());
        let default = services.get(&default_locale).cloned().ok_or_else(|| {
            ImmogramError::Config(format!("default locale '{default_locale}' was not loaded"))
        })?;

        Ok(Self { services, default })
    }

    pub fn get(&self, locale: &Locale) -> Option<Arc<MessageService>> {
        self.services.get(locale).cloned()
    }

    /// Service for the configured default locale.
    pub fn default_service(&self) -> Arc<MessageService> {
        Arc::clone(&self.default)
    }

    pub fn default_locale(&self) -> &Locale {
        self.default.locale()
    }

    /// Loaded locales, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.services.keys()
    }
}

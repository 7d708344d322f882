//! # immogram-i18n
//!
//! Localized bot messages: per-locale catalogs, date/time formatting,
//! positional templates, and the `MessageService` facade that turns task
//! snapshots into user-facing text.

pub mod catalog;
pub mod keys;
pub mod registry;
pub mod service;
pub mod temporal;
pub mod template;


pub use catalog::{bundled_locales, Catalog, Locale};
pub use keys::MessageKey;
pub use registry::MessageRegistry;
pub use service::MessageService;
pub use temporal::TemporalFormatter;

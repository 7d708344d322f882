//! Locale-bound date and time formatting.
//!
//! Patterns come from the catalog (`dateFormat`, `timeFormat`) and use
//! strftime syntax. The zone is applied when formatting, never stored.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

use crate::catalog::Catalog;
use crate::keys::{DATE_FORMAT, TIME_FORMAT};
use immogram_core::error::ImmogramError;

#[derive(Debug, Clone)]
pub struct TemporalFormatter {
    date_pattern: String,
    time_pattern: String,
    locale: chrono::Locale,
}

impl TemporalFormatter {
    /// Build from explicit patterns. Malformed patterns fail here so that
    /// formatting itself cannot fail.
    pub fn new(
        date_pattern: &str,
        time_pattern: &str,
        locale: chrono::Locale,
    ) -> Result<Self, ImmogramError> {
        validate(DATE_FORMAT, date_pattern, locale)?;
        validate(TIME_FORMAT, time_pattern, locale)?;
        Ok(Self {
            date_pattern: date_pattern.to_string(),
            time_pattern: time_pattern.to_string(),
            locale,
        })
    }

    /// Build from the reserved date/time keys of `catalog`.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self, ImmogramError> {
        Self::new(
            catalog.get(DATE_FORMAT)?,
            catalog.get(TIME_FORMAT)?,
            catalog.formatting_locale(),
        )
    }

    /// Date of `instant` in the host's current local zone.
    pub fn format_date<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> String {
        self.format_date_in(instant, &Local)
    }

    /// Time of `instant` in the host's current local zone.
    pub fn format_time<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> String {
        self.format_time_in(instant, &Local)
    }

    pub fn format_date_in<Tz: TimeZone, Z: TimeZone>(&self, instant: &DateTime<Tz>, zone: &Z) -> String
    where
        Z::Offset: Display,
    {
        instant
            .with_timezone(zone)
            .format_localized(&self.date_pattern, self.locale)
            .to_string()
    }

    pub fn format_time_in<Tz: TimeZone, Z: TimeZone>(&self, instant: &DateTime<Tz>, zone: &Z) -> String
    where
        Z::Offset: Display,
    {
        instant
            .with_timezone(zone)
            .format_localized(&self.time_pattern, self.locale)
            .to_string()
    }
}

fn validate(key: &str, pattern: &str, locale: chrono::Locale) -> Result<(), ImmogramError> {
    if pattern.trim().is_empty() {
        return Err(ImmogramError::Catalog(format!("'{key}' pattern is empty")));
    }
    if StrftimeItems::new_with_locale(pattern, locale).any(|item| matches!(item, Item::Error)) {
        return Err(ImmogramError::Catalog(format!(
            "'{key}' pattern {pattern:?} is not a valid strftime pattern"
        )));
    }
    Ok(())
}

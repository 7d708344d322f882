//! Per-locale message facade: one method per bot message.

use std::fmt::Display;
use std::path::Path;

use crate::catalog::{Catalog, Locale};
use crate::keys::MessageKey;
use crate::temporal::TemporalFormatter;
use crate::template;
use immogram_core::error::{FormatError, ImmogramError, PreconditionViolation};
use immogram_core::traits::ManagedTask;

/// Renders bot messages for one locale.
///
/// Construction verifies the whole catalog: every key the service reads must
/// exist and no pattern may reference more arguments than its message
/// supplies. Rendering only reads the catalog and formatter, so one instance
/// can be shared across threads.
#[derive(Debug, Clone)]
pub struct MessageService {
    catalog: Catalog,
    temporal: TemporalFormatter,
}

impl MessageService {
    pub fn new(catalog: Catalog) -> Result<Self, ImmogramError> {
        let temporal = TemporalFormatter::from_catalog(&catalog)?;
        let service = Self { catalog, temporal };
        service.verify()?;
        Ok(service)
    }

    /// Service over the compiled-in catalog for `locale`.
    pub fn bundled(locale: &Locale) -> Result<Self, ImmogramError> {
        Self::new(Catalog::bundled(locale)?)
    }

    /// Service over `dir/<tag>.toml`, or the bundled catalog when absent.
    pub fn load(locale: &Locale, dir: Option<&Path>) -> Result<Self, ImmogramError> {
        Self::new(Catalog::load(locale, dir)?)
    }

    pub fn locale(&self) -> &Locale {
        self.catalog.locale()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn formatter(&self) -> &TemporalFormatter {
        &self.temporal
    }

    fn verify(&self) -> Result<(), ImmogramError> {
        for key in MessageKey::ALL {
            let pattern = self.catalog.get(key.as_str())?;
            let required = template::arity(pattern)?;
            if required > key.arity() {
                return Err(FormatError::ArityMismatch {
                    key: key.as_str().to_string(),
                    required,
                    declared: key.arity(),
                }
                .into());
            }
        }
        Ok(())
    }

    fn format(&self, key: MessageKey, args: &[&dyn Display]) -> Result<String, ImmogramError> {
        let pattern = self.catalog.get(key.as_str())?;
        Ok(template::render(pattern, args)?)
    }

    fn text(&self, key: MessageKey) -> Result<String, ImmogramError> {
        self.format(key, &[])
    }

    // --- Static messages ---

    pub fn obeying_chat(&self) -> Result<String, ImmogramError> {
        self.text(MessageKey::ObeyingChat)
    }

    pub fn factory_listing(&self) -> Result<String, ImmogramError> {
        self.text(MessageKey::FactoryListing)
    }

    pub fn factory_request_term(&self) -> Result<String, ImmogramError> {
        self.text(MessageKey::FactoryRequestTerm)
    }

    pub fn task_listing(&self) -> Result<String, ImmogramError> {
        self.text(MessageKey::TaskListing)
    }

    pub fn task_back_to_listing(&self) -> Result<String, ImmogramError> {
        self.text(MessageKey::TaskBackToListing)
    }

    pub fn task_back_to_status(&self) -> Result<String, ImmogramError> {
        self.text(MessageKey::TaskBackToStatus)
    }

    pub fn task_schedule_or_cancel(&self) -> Result<String, ImmogramError> {
        self.text(MessageKey::TaskScheduleOrCancel)
    }

    pub fn task_last_run_exception(&self) -> Result<String, ImmogramError> {
        self.text(MessageKey::TaskLastRunException)
    }

    // --- Task messages ---

    pub fn factory_task_created<T: ManagedTask + ?Sized>(
        &self,
        task: &T,
    ) -> Result<String, ImmogramError> {
        self.format(MessageKey::FactoryTaskCreated, &[&task.alias()])
    }

    pub fn task_scheduled<T: ManagedTask + ?Sized>(&self, task: &T) -> Result<String, ImmogramError> {
        self.format(MessageKey::TaskScheduled, &[&task.alias()])
    }

    pub fn task_cancelled<T: ManagedTask + ?Sized>(&self, task: &T) -> Result<String, ImmogramError> {
        self.format(MessageKey::TaskCancelled, &[&task.alias()])
    }

    pub fn task_deleted<T: ManagedTask + ?Sized>(&self, task: &T) -> Result<String, ImmogramError> {
        self.format(MessageKey::TaskDeleted, &[&task.alias()])
    }

    /// Alias and full failure trace of the last run.
    ///
    /// The task must carry a failure; check `last_run_exception()` first.
    pub fn task_with_exception<T: ManagedTask + ?Sized>(
        &self,
        task: &T,
    ) -> Result<String, ImmogramError> {
        let Some(failure) = task.last_run_exception() else {
            return Err(PreconditionViolation {
                alias: task.alias().to_string(),
                field: "last run exception",
            }
            .into());
        };
        let trace = failure.trace();
        self.format(MessageKey::TaskWithException, &[&task.alias(), &trace])
    }

    pub fn task_without_exception<T: ManagedTask + ?Sized>(
        &self,
        task: &T,
    ) -> Result<String, ImmogramError> {
        self.format(MessageKey::TaskWithoutException, &[&task.alias()])
    }

    /// Alias followed by the schedule, last-run and exception clauses.
    pub fn task_status<T: ManagedTask + ?Sized>(&self, task: &T) -> Result<String, ImmogramError> {
        let scheduled = self.schedule_clause(task)?;
        let last_run = self.run_timestamp_clause(task)?;
        let exception = self.exception_clause(task)?;
        self.format(
            MessageKey::TaskStatus,
            &[&task.alias(), &scheduled, &last_run, &exception],
        )
    }

    fn schedule_clause<T: ManagedTask + ?Sized>(&self, task: &T) -> Result<String, ImmogramError> {
        match task.run_period() {
            None => self.text(MessageKey::TaskIsNotScheduled),
            Some(period) => {
                let hours = period.as_secs() / 3600;
                self.format(MessageKey::TaskIsScheduled, &[&hours])
            }
        }
    }

    fn run_timestamp_clause<T: ManagedTask + ?Sized>(
        &self,
        task: &T,
    ) -> Result<String, ImmogramError> {
        match task.last_run_timestamp() {
            None => self.text(MessageKey::TaskHasNoRunTimestamp),
            Some(timestamp) => {
                let date = self.temporal.format_date(&timestamp);
                let time = self.temporal.format_time(&timestamp);
                self.format(MessageKey::TaskHasRunTimestamp, &[&date, &time])
            }
        }
    }

    fn exception_clause<T: ManagedTask + ?Sized>(&self, task: &T) -> Result<String, ImmogramError> {
        match task.last_run_exception() {
            None => self.text(MessageKey::TaskHasNoException),
            Some(_) => self.text(MessageKey::TaskHasException),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::traits::ManagedTask;

/// Point-in-time view of a managed task, as handed out by the scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// User-chosen task name.
    pub alias: String,
    /// Interval between scheduled runs; `None` when the task is not scheduled.
    #[serde(default, rename = "run_period_secs", with = "period_secs")]
    pub run_period: Option<Duration>,
    /// When the task last ran.
    #[serde(default)]
    pub last_run_timestamp: Option<DateTime<Utc>>,
    /// Failure raised by the last run, if any.
    #[serde(default)]
    pub last_run_exception: Option<TaskFailure>,
}

impl TaskSnapshot {
    /// A task that was never scheduled and never ran.
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            run_period: None,
            last_run_timestamp: None,
            last_run_exception: None,
        }
    }

    pub fn with_run_period(mut self, period: Duration) -> Self {
        self.run_period = Some(period);
        self
    }

    pub fn with_last_run(mut self, timestamp: DateTime<Utc>) -> Self {
        self.last_run_timestamp = Some(timestamp);
        self
    }

    pub fn with_failure(mut self, failure: TaskFailure) -> Self {
        self.last_run_exception = Some(failure);
        self
    }
}

impl ManagedTask for TaskSnapshot {
    fn alias(&self) -> &str {
        &self.alias
    }

    fn run_period(&self) -> Option<Duration> {
        self.run_period
    }

    fn last_run_timestamp(&self) -> Option<DateTime<Utc>> {
        self.last_run_timestamp
    }

    fn last_run_exception(&self) -> Option<&TaskFailure> {
        self.last_run_exception.as_ref()
    }
}

/// Error captured from a task run: the top-level message plus its causes,
/// outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFailure {
    pub message: String,
    #[serde(default)]
    pub causes: Vec<String>,
}

impl TaskFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            causes: Vec::new(),
        }
    }

    pub fn caused_by(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    /// Capture an error and its whole `source()` chain.
    pub fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut failure = Self::new(err.to_string());
        let mut source = err.source();
        while let Some(cause) = source {
            failure.causes.push(cause.to_string());
            source = cause.source();
        }
        failure
    }

    /// Multi-line trace: the message, then one `Caused by:` line per cause.
    pub fn trace(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        for cause in &self.causes {
            write!(f, "\nCaused by: {cause}")?;
        }
        Ok(())
    }
}

/// Serialize `Option<Duration>` as whole seconds.
mod period_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        period: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match period {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_secs))
    }
}

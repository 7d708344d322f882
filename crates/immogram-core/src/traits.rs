use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::task::TaskFailure;

/// Read-only accessors over a scheduler-owned task.
///
/// The scheduler implements this for whatever it keeps internally; message
/// rendering only ever reads through it and never mutates the task.
pub trait ManagedTask {
    /// User-chosen task name.
    fn alias(&self) -> &str;

    /// Interval between scheduled runs, `None` when not scheduled.
    fn run_period(&self) -> Option<Duration>;

    /// When the task last ran, `None` if it never ran.
    fn last_run_timestamp(&self) -> Option<DateTime<Utc>>;

    /// Failure raised by the last run, if any.
    fn last_run_exception(&self) -> Option<&TaskFailure>;
}

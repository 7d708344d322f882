//! Catalog keys read by the message service, with the argument count each
//! message supplies.

/// Reserved key holding the strftime pattern for dates.
pub const DATE_FORMAT: &str = "dateFormat";
/// Reserved key holding the strftime pattern for times.
pub const TIME_FORMAT: &str = "timeFormat";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    ObeyingChat,
    FactoryListing,
    FactoryRequestTerm,
    FactoryTaskCreated,
    TaskListing,
    TaskBackToListing,
    TaskBackToStatus,
    TaskScheduled,
    TaskCancelled,
    TaskDeleted,
    TaskWithException,
    TaskWithoutException,
    TaskStatus,
    TaskScheduleOrCancel,
    TaskLastRunException,
    TaskIsNotScheduled,
    TaskIsScheduled,
    TaskHasNoRunTimestamp,
    TaskHasRunTimestamp,
    TaskHasNoException,
    TaskHasException,
}

impl MessageKey {
    pub const ALL: [MessageKey; 21] = [
        Self::ObeyingChat,
        Self::FactoryListing,
        Self::FactoryRequestTerm,
        Self::FactoryTaskCreated,
        Self::TaskListing,
        Self::TaskBackToListing,
        Self::TaskBackToStatus,
        Self::TaskScheduled,
        Self::TaskCancelled,
        Self::TaskDeleted,
        Self::TaskWithException,
        Self::TaskWithoutException,
        Self::TaskStatus,
        Self::TaskScheduleOrCancel,
        Self::TaskLastRunException,
        Self::TaskIsNotScheduled,
        Self::TaskIsScheduled,
        Self::TaskHasNoRunTimestamp,
        Self::TaskHasRunTimestamp,
        Self::TaskHasNoException,
        Self::TaskHasException,
    ];

    /// Key as written in catalog files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ObeyingChat => "obeyingChat",
            Self::FactoryListing => "factoryListing",
            Self::FactoryRequestTerm => "factoryRequestTerm",
            Self::FactoryTaskCreated => "factoryTaskCreated",
            Self::TaskListing => "taskListing",
            Self::TaskBackToListing => "taskBackToListing",
            Self::TaskBackToStatus => "taskBackToStatus",
            Self::TaskScheduled => "taskScheduled",
            Self::TaskCancelled => "taskCancelled",
            Self::TaskDeleted => "taskDeleted",
            Self::TaskWithException => "taskWithException",
            Self::TaskWithoutException => "taskWithoutException",
            Self::TaskStatus => "taskStatus",
            Self::TaskScheduleOrCancel => "taskScheduleOrCancel",
            Self::TaskLastRunException => "taskLastRunException",
            Self::TaskIsNotScheduled => "taskIsNotScheduled",
            Self::TaskIsScheduled => "taskIsScheduled",
            Self::TaskHasNoRunTimestamp => "taskHasNoRunTimestamp",
            Self::TaskHasRunTimestamp => "taskHasRunTimestamp",
            Self::TaskHasNoException => "taskHasNoException",
            Self::TaskHasException => "taskHasException",
        }
    }

    /// Number of arguments the service passes when rendering this key.
    pub fn arity(self) -> usize {
        match self {
            Self::TaskStatus => 4,
            Self::TaskWithException | Self::TaskHasRunTimestamp => 2,
            Self::FactoryTaskCreated
            | Self::TaskScheduled
            | Self::TaskCancelled
            | Self::TaskDeleted
            | Self::TaskWithoutException
            | Self::TaskIsScheduled => 1,
            Self::ObeyingChat
            | Self::FactoryListing
            | Self::FactoryRequestTerm
            | Self::TaskListing
            | Self::TaskBackToListing
            | Self::TaskBackToStatus
            | Self::TaskScheduleOrCancel
            | Self::TaskLastRunException
            | Self::TaskIsNotScheduled
            | Self::TaskHasNoRunTimestamp
            | Self::TaskHasNoException
            | Self::TaskHasException => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let names: HashSet<&str> = MessageKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names.len(), MessageKey::ALL.len());
        assert!(!names.contains(DATE_FORMAT));
        assert!(!names.contains(TIME_FORMAT));
    }

    #[test]
    fn test_composite_arities() {
        assert_eq!(MessageKey::TaskStatus.arity(), 4);
        assert_eq!(MessageKey::TaskHasRunTimestamp.arity(), 2);
        assert_eq!(MessageKey::TaskIsScheduled.arity(), 1);
        assert_eq!(MessageKey::TaskHasException.arity(), 0);
    }
}

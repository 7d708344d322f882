//! Render every bot message for one task, as the chat would show them.

use immogram_core::error::ImmogramError;
use immogram_core::traits::ManagedTask;
use immogram_i18n::MessageService;

/// Labelled renderings, in the order a chat session would meet them.
pub fn render_all<T: ManagedTask + ?Sized>(
    messages: &MessageService,
    task: &T,
) -> Result<Vec<(&'static str, String)>, ImmogramError> {
    let mut out = vec![
        ("obeyingChat", messages.obeying_chat()?),
        ("factoryListing", messages.factory_listing()?),
        ("factoryRequestTerm", messages.factory_request_term()?),
        ("factoryTaskCreated", messages.factory_task_created(task)?),
        ("taskListing", messages.task_listing()?),
        ("taskStatus", messages.task_status(task)?),
        ("taskScheduleOrCancel", messages.task_schedule_or_cancel()?),
        ("taskLastRunException", messages.task_last_run_exception()?),
    ];

    match task.last_run_exception() {
        Some(_) => out.push(("taskWithException", messages.task_with_exception(task)?)),
        None => out.push((
            "taskWithoutException",
            messages.task_without_exception(task)?,
        )),
    }

    out.extend([
        ("taskScheduled", messages.task_scheduled(task)?),
        ("taskCancelled", messages.task_cancelled(task)?),
        ("taskDeleted", messages.task_deleted(task)?),
        ("taskBackToStatus", messages.task_back_to_status()?),
        ("taskBackToListing", messages.task_back_to_listing()?),
    ]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use immogram_core::task::{TaskFailure, TaskSnapshot};
    use immogram_i18n::Locale;

    #[test]
    fn test_render_all_without_failure() {
        let messages = MessageService::bundled(&Locale::new("en")).unwrap();
        let rendered = render_all(&messages, &TaskSnapshot::new("Alpha")).unwrap();
        let labels: Vec<&str> = rendered.iter().map(|(label, _)| *label).collect();
        assert!(labels.contains(&"taskWithoutException"));
        assert!(!labels.contains(&"taskWithException"));
        assert_eq!(rendered.len(), 14);
    }

    #[test]
    fn test_render_all_with_failure() {
        let messages = MessageService::bundled(&Locale::new("de")).unwrap();
        let task = TaskSnapshot::new("Alpha").with_failure(TaskFailure::new("HTTP 503"));
        let rendered = render_all(&messages, &task).unwrap();
        let (_, trace) = rendered
            .iter()
            .find(|(label, _)| *label == "taskWithException")
            .unwrap();
        assert!(trace.ends_with("HTTP 503"));
    }
}

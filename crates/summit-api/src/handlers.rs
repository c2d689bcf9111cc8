//! Cron and task-queue handlers.
//!
//! These are the out-of-band entry points the platform scheduler and task
//! runner invoke, mirrored as plain functions so any host (HTTP shim,
//! cron binary, test) can drive them.

use crate::service::ConferenceService;
use summit_core::Result;
use summit_platform::{Mailer, Task};
use tracing::info;

/// Cron trigger: rebuild the near-sold-out announcement cache entry.
pub fn run_set_announcement(service: &ConferenceService) -> Result<String> {
    service.cache_announcement()
}

/// Task worker: drain the queue and deliver one confirmation email per
/// queued conference creation.
///
/// Returns the number of messages delivered.
pub fn run_email_worker(service: &ConferenceService, mailer: &dyn Mailer) -> Result<usize> {
    let mut delivered = 0;
    while let Some(task) = service.tasks().pop()? {
        match task {
            Task::SendConfirmationEmail { email, summary } => {
                mailer.send(
                    &email,
                    "You created a new Conference!",
                    &format!(
                        "Hi, you have created a following conference:\r\n\r\n{}",
                        summary
                    ),
                )?;
                delivered += 1;
            }
        }
    }
    if delivered > 0 {
        info!(delivered, "confirmation emails sent");
    }
    Ok(delivered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use summit_platform::MemoryMailer;

    #[test]
    fn test_email_worker_drains_queue() {
        let service = ConferenceService::new();
        for i in 0..3 {
            service
                .tasks()
                .push(Task::SendConfirmationEmail {
                    email: format!("user{}@example.com", i),
                    summary: "RustConf in Portland".to_string(),
                })
                .unwrap();
        }

        let mailer = MemoryMailer::new();
        assert_eq!(run_email_worker(&service, &mailer).unwrap(), 3);
        assert!(service.tasks().is_empty());

        let sent = mailer.sent();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0].subject, "You created a new Conference!");
        assert!(sent[0].body.contains("RustConf in Portland"));
    }

    #[test]
    fn test_set_announcement_with_empty_store() {
        let service = ConferenceService::new();
        assert_eq!(run_set_announcement(&service).unwrap(), "");
        assert_eq!(service.get_announcement().unwrap(), "");
    }
}

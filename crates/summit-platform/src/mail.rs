//! Outbound mail delivery.

use std::sync::{Arc, Mutex};
use summit_core::{Error, Result};
use tracing::info;

/// One delivered message, as recorded by [`MemoryMailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Message body
    pub body: String,
}

/// Delivery backend for outbound mail.
pub trait Mailer {
    /// Delivers one message.
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}

/// Mailer that writes deliveries to the log instead of the network.
///
/// The default wiring: the platform's real mail relay sits outside this
/// process, so production deployments swap in their own [`Mailer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        info!(to, subject, body_len = body.len(), "sending mail");
        Ok(())
    }
}

/// Mailer that records deliveries in memory, for tests.
#[derive(Clone, Default)]
pub struct MemoryMailer {
    sent: Arc<Mutex<Vec<SentMail>>>,
}

impl MemoryMailer {
    /// Creates a mailer with an empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything delivered so far.
    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Mailer for MemoryMailer {
    fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let mut sent = self.sent.lock().map_err(|_| Error::LockPoisoned)?;
        sent.push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

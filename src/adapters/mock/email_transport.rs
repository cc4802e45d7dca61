use crate::ports::email_transport::{EmailMessage, EmailTransport as EmailTransportTrait, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Recording EmailTransport
///
/// Logs and keeps every message instead of delivering it. Can be told to fail
/// from the n-th send onwards.
#[derive(Default)]
pub struct EmailTransport {
    sent: Mutex<Vec<EmailMessage>>,
    fail_from: Mutex<Option<usize>>,
}

impl EmailTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every send after `count` successful ones
    pub fn fail_after(&self, count: usize) {
        *self.fail_from.lock().unwrap() = Some(count);
    }

    /// Messages accepted so far
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailTransportTrait for EmailTransport {
    async fn send(&self, message: &EmailMessage) -> Result<()> {
        let mut sent = self.sent.lock().unwrap();
        let fail_from = *self.fail_from.lock().unwrap();
        if fail_from.is_some_and(|limit| sent.len() >= limit) {
            return Err(format!("mail relay refused message to {}", message.to).into());
        }

        tracing::info!(
            from = %message.from,
            to = %message.to,
            event = message.event.as_str(),
            subject = %message.subject,
            "Simulated email delivery"
        );
        sent.push(message.clone());
        Ok(())
    }
}

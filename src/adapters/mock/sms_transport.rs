use crate::ports::sms_transport::{SmsOutcome, SmsRequest, SmsTransport as SmsTransportTrait};
use async_trait::async_trait;
use std::sync::Mutex;

/// Scripted SmsTransport
///
/// Answers every send with the configured outcome (delivered by default) and
/// keeps the requests it received.
pub struct SmsTransport {
    outcome: Mutex<SmsOutcome>,
    requests: Mutex<Vec<SmsRequest>>,
}

impl SmsTransport {
    pub fn new() -> Self {
        Self {
            outcome: Mutex::new(SmsOutcome::sent()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond_with(&self, outcome: SmsOutcome) {
        *self.outcome.lock().unwrap() = outcome;
    }

    pub fn requests(&self) -> Vec<SmsRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for SmsTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsTransportTrait for SmsTransport {
    async fn send(&self, request: &SmsRequest) -> SmsOutcome {
        tracing::info!(
            reseller_id = %request.reseller_id,
            client_id = %request.client_id,
            status_to = %request.status_to,
            event = request.event.as_str(),
            "Simulated SMS delivery"
        );
        self.requests.lock().unwrap().push(request.clone());
        self.outcome.lock().unwrap().clone()
    }
}

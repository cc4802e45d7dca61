use crate::domain::ContractorId;
use crate::ports::recipient_settings::{RecipientSettings as RecipientSettingsTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory RecipientSettings
///
/// Stores sender addresses and permitted staff addresses per reseller.
/// Can be told to fail every lookup.
#[derive(Default)]
pub struct RecipientSettings {
    senders: Mutex<HashMap<ContractorId, String>>,
    permitted: Mutex<HashMap<(ContractorId, String), Vec<String>>>,
    failure: Mutex<Option<String>>,
}

impl RecipientSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reseller's sender address
    pub fn set_sender(&self, reseller_id: ContractorId, email: impl Into<String>) {
        self.senders
            .lock()
            .unwrap()
            .insert(reseller_id, email.into());
    }

    /// Grant `permit` to a staff address at the reseller
    pub fn add_permitted(
        &self,
        reseller_id: ContractorId,
        permit: &str,
        address: impl Into<String>,
    ) {
        self.permitted
            .lock()
            .unwrap()
            .entry((reseller_id, permit.to_string()))
            .or_default()
            .push(address.into());
    }

    /// Fail every lookup with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }

    fn check_failure(&self) -> Result<()> {
        match self.failure.lock().unwrap().clone() {
            Some(message) => Err(message.into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl RecipientSettingsTrait for RecipientSettings {
    async fn sender_email(&self, reseller_id: ContractorId) -> Result<Option<String>> {
        self.check_failure()?;
        Ok(self.senders.lock().unwrap().get(&reseller_id).cloned())
    }

    async fn permitted_emails(
        &self,
        reseller_id: ContractorId,
        permit: &str,
    ) -> Result<Vec<String>> {
        self.check_failure()?;
        Ok(self
            .permitted
            .lock()
            .unwrap()
            .get(&(reseller_id, permit.to_string()))
            .cloned()
            .unwrap_or_default())
    }
}

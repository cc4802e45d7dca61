use crate::domain::{Contractor, ContractorId, ContractorRole};
use crate::ports::contractor_directory::{ContractorDirectory as ContractorDirectoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory ContractorDirectory
///
/// Contractors are stored by id and only returned for the role they were
/// registered with. Can be told to fail every lookup.
pub struct ContractorDirectory {
    contractors: Mutex<HashMap<ContractorId, Contractor>>,
    failure: Mutex<Option<String>>,
}

impl ContractorDirectory {
    pub fn new() -> Self {
        Self {
            contractors: Mutex::new(HashMap::new()),
            failure: Mutex::new(None),
        }
    }

    /// Register or replace a contractor
    pub fn add(&self, contractor: Contractor) {
        self.contractors
            .lock()
            .unwrap()
            .insert(contractor.id, contractor);
    }

    /// Fail every lookup with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }
}

impl Default for ContractorDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContractorDirectoryTrait for ContractorDirectory {
    async fn find_by_id(
        &self,
        role: ContractorRole,
        id: ContractorId,
    ) -> Result<Option<Contractor>> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(message.into());
        }

        Ok(self
            .contractors
            .lock()
            .unwrap()
            .get(&id)
            .filter(|contractor| contractor.role == role)
            .cloned())
    }
}

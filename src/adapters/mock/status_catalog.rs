use crate::domain::{Status, StatusId, reference_statuses};
use crate::ports::status_catalog::{Result, StatusCatalog as StatusCatalogTrait};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory StatusCatalog
///
/// Can be told to fail every lookup.
pub struct StatusCatalog {
    statuses: HashMap<StatusId, Status>,
    failure: Mutex<Option<String>>,
}

impl StatusCatalog {
    pub fn new(statuses: impl IntoIterator<Item = Status>) -> Self {
        Self {
            statuses: statuses.into_iter().map(|s| (s.id, s)).collect(),
            failure: Mutex::new(None),
        }
    }

    /// Completed, Pending and Rejected
    pub fn with_reference_statuses() -> Self {
        Self::new(reference_statuses())
    }

    /// Fail every lookup with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }
}

impl Default for StatusCatalog {
    fn default() -> Self {
        Self::with_reference_statuses()
    }
}

#[async_trait]
impl StatusCatalogTrait for StatusCatalog {
    async fn find_by_id(&self, id: StatusId) -> Result<Option<Status>> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(message.into());
        }
        Ok(self.statuses.get(&id).cloned())
    }
}

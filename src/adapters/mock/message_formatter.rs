use crate::domain::ContractorId;
use crate::ports::message_formatter::{
    MessageFormatter as MessageFormatterTrait, MessageParams, Result, interpolate,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory MessageFormatter
///
/// Templates are shared by all resellers. An unregistered key renders as the
/// key itself. Can be told to fail every render.
#[derive(Default)]
pub struct MessageFormatter {
    templates: Mutex<HashMap<String, String>>,
    failure: Mutex<Option<String>>,
}

impl MessageFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// English texts for every key the return status notification uses
    pub fn with_default_templates() -> Self {
        let formatter = Self::new();
        for (key, template) in [
            ("NewPositionAdded", "New position added"),
            (
                "PositionStatusHasChanged",
                "Status changed from {FROM} to {TO}",
            ),
            (
                "complaintEmployeeEmailSubject",
                "Complaint {COMPLAINT_NUMBER}: {DIFFERENCES}",
            ),
            (
                "complaintEmployeeEmailBody",
                "Complaint {COMPLAINT_NUMBER} of {CLIENT_NAME} ({DATE}): {DIFFERENCES}",
            ),
            (
                "complaintClientEmailSubject",
                "Your complaint {COMPLAINT_NUMBER}",
            ),
            (
                "complaintClientEmailBody",
                "Dear {CLIENT_NAME}, {DIFFERENCES}.",
            ),
        ] {
            formatter.add_template(key, template);
        }
        formatter
    }

    pub fn add_template(&self, key: impl Into<String>, template: impl Into<String>) {
        self.templates
            .lock()
            .unwrap()
            .insert(key.into(), template.into());
    }

    /// Fail every render with `message`
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.failure.lock().unwrap() = Some(message.into());
    }
}

#[async_trait]
impl MessageFormatterTrait for MessageFormatter {
    async fn render(
        &self,
        key: &str,
        params: Option<&MessageParams>,
        _reseller_id: ContractorId,
    ) -> Result<String> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(message.into());
        }

        let templates = self.templates.lock().unwrap();
        let template = templates.get(key).map(String::as_str).unwrap_or(key);
        Ok(interpolate(template, params))
    }
}

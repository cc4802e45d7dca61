pub mod contractor_directory;
pub mod email_transport;
pub mod message_formatter;
pub mod recipient_settings;
pub mod sms_transport;
pub mod status_catalog;

pub use contractor_directory::ContractorDirectory;
pub use email_transport::{EmailMessage, EmailTransport};
pub use message_formatter::{MessageFormatter, MessageParams, interpolate};
pub use recipient_settings::RecipientSettings;
pub use sms_transport::{SmsOutcome, SmsRequest, SmsTransport};
pub use status_catalog::StatusCatalog;

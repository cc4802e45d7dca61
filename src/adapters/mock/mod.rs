pub mod contractor_directory;
pub mod demo;
pub mod email_transport;
pub mod message_formatter;
pub mod recipient_settings;
pub mod sms_transport;
pub mod status_catalog;

pub use contractor_directory::ContractorDirectory;
pub use demo::seed_demo_data;
pub use email_transport::EmailTransport;
pub use message_formatter::MessageFormatter;
pub use recipient_settings::RecipientSettings;
pub use sms_transport::SmsTransport;
pub use status_catalog::StatusCatalog;

pub mod contractor_directory;
pub mod message_formatter;
pub mod recipient_settings;
pub mod status_catalog;

pub use contractor_directory::ContractorDirectory as PostgresContractorDirectory;
pub use message_formatter::MessageFormatter as PostgresMessageFormatter;
pub use recipient_settings::RecipientSettings as PostgresRecipientSettings;
pub use status_catalog::StatusCatalog as PostgresStatusCatalog;

mod change_describer;
mod dispatcher;
mod entity_resolver;
mod errors;
mod request_validator;
mod service;
mod template_data;

pub use change_describer::{NEW_POSITION_ADDED, POSITION_STATUS_HAS_CHANGED, describe_change};
pub use dispatcher::{
    CLIENT_EMAIL_BODY, CLIENT_EMAIL_SUBJECT, DispatchContext, EMPLOYEE_EMAIL_BODY,
    EMPLOYEE_EMAIL_SUBJECT, dispatch,
};
pub use entity_resolver::{ResolvedParties, resolve_parties};
pub use errors::{Result, ReturnNotificationError};
pub use request_validator::{ValidatedRequest, precheck_reseller, validate_request};
pub use service::{ServiceDependencies, perform_return_status_notification};
pub use template_data::{assemble_template_data, ensure_complete};

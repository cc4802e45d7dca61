pub mod contractor;
pub mod notification;
pub mod payload;
pub mod status;
pub mod value_objects;

pub use contractor::*;
pub use notification::*;
pub use payload::RequestParams;
pub use status::*;
pub use value_objects::*;

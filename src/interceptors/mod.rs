pub mod error;
pub mod path_id;
pub mod payload;
pub mod response;

pub use error::{AppError, AppResult, ValidationErrors};
pub use path_id::PathId;
pub use payload::Payload;
pub use response::ApiSuccess;

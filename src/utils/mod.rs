pub mod datetime;
pub mod form;
pub mod validation;

pub use datetime::{is_after, parse_timestamp};
pub use form::Lenient;
pub use validation::{collect_errors, parsed, require, require_parsed};

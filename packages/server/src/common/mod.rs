// Common types used across multiple domains and layers

pub mod errors;
pub mod types;
pub mod utils;

pub use errors::ApiError;
pub use types::{FormType, SubmissionStatus};

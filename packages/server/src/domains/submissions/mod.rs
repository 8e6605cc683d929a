pub mod data;
pub mod models;

pub use data::FormSubmissionData;
pub use models::{FormSubmission, SubmissionChanges};

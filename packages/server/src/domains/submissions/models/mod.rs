mod submission;

pub use submission::{FormSubmission, SubmissionChanges};

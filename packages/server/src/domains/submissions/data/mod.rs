mod submission;

pub use submission::FormSubmissionData;

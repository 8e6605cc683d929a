use crate::domains::submissions::models::FormSubmission;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSubmissionData {
    pub id: String,
    pub user_id: String,
    pub form_type: String,
    pub status: String,
    pub form_data: serde_json::Value,
    pub extracted_data: serde_json::Value,
    pub submission_reference: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub submitted_at: Option<String>,
}

impl From<FormSubmission> for FormSubmissionData {
    fn from(submission: FormSubmission) -> Self {
        Self {
            id: submission.id.to_string(),
            user_id: submission.user_id.to_string(),
            form_type: submission.form_type,
            status: submission.status,
            form_data: submission.form_data,
            extracted_data: submission.extracted_data,
            submission_reference: submission.submission_reference,
            created_at: submission.created_at.to_rfc3339(),
            updated_at: submission.updated_at.to_rfc3339(),
            submitted_at: submission.submitted_at.map(|t| t.to_rfc3339()),
        }
    }
}

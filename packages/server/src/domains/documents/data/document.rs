use crate::domains::documents::models::Document;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentData {
    pub id: String,
    pub user_id: String,
    pub form_submission_id: Option<String>,
    pub document_type: String,
    pub file_url: String,
    pub file_name: String,
    pub file_size: i64,
    pub extracted_text: Option<String>,
    pub created_at: String,
}

impl From<Document> for DocumentData {
    fn from(document: Document) -> Self {
        Self {
            id: document.id.to_string(),
            user_id: document.user_id.to_string(),
            form_submission_id: document.form_submission_id.map(|id| id.to_string()),
            document_type: document.document_type,
            file_url: document.file_url,
            file_name: document.file_name,
            file_size: document.file_size,
            extracted_text: document.extracted_text,
            created_at: document.created_at.to_rfc3339(),
        }
    }
}

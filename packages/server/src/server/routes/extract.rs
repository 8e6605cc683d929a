// Field extraction endpoint: OCR text in, normalized form fields out.

use axum::extract::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::common::{ApiError, FormType};
use crate::domains::extraction::{
    extract_fields, DocumentText, ExtractionError, ExtractionOutcome,
};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    pub documents: Vec<ExtractDocument>,
    pub form_type: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractDocument {
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub extracted_text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub success: bool,
    pub extracted_data: Map<String, Value>,
    pub documents_processed: usize,
    pub performance: Performance,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub total_time: String,
    pub time_per_document: String,
    pub meets_target: bool,
    pub target: &'static str,
}

impl From<ExtractionOutcome> for ExtractResponse {
    fn from(outcome: ExtractionOutcome) -> Self {
        Self {
            success: true,
            extracted_data: outcome.fields,
            documents_processed: outcome.documents_processed,
            performance: Performance {
                total_time: format!("{:.2}s", outcome.total_seconds),
                time_per_document: format!("{:.2}s", outcome.seconds_per_document),
                meets_target: outcome.meets_target,
                target: "≤5s per document",
            },
        }
    }
}

pub async fn extract_handler(
    Extension(state): Extension<AppState>,
    _user: AuthUser,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, ApiError> {
    if request.documents.is_empty() {
        return Err(ApiError::BadRequest("No documents provided".into()));
    }

    let form_type = FormType::parse_or_default(&request.form_type);

    let documents: Vec<DocumentText> = request
        .documents
        .into_iter()
        .map(|doc| DocumentText {
            document_type: doc.document_type,
            extracted_text: doc.extracted_text,
        })
        .collect();

    let outcome = extract_fields(state.deps.ai.as_ref(), form_type, &documents)
        .await
        .map_err(|e| match e {
            ExtractionError::NoReadableText
            | ExtractionError::UnparseableResponse
            | ExtractionError::NothingExtracted => ApiError::Unprocessable(e.to_string()),
            ExtractionError::Ai(inner) => ApiError::Internal(inner),
        })?;

    Ok(Json(outcome.into()))
}

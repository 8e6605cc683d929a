// OCR over an uploaded file's public URL.

use axum::extract::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::ApiError;
use crate::domains::documents::Document;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrRequest {
    pub file_url: String,
    /// When given, the recognized text is persisted on the document row.
    pub document_id: Option<Uuid>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrResponse {
    pub success: bool,
    pub extracted_text: String,
    pub confidence: &'static str,
}

pub async fn ocr_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    Json(request): Json<OcrRequest>,
) -> Result<Json<OcrResponse>, ApiError> {
    if request.file_url.trim().is_empty() {
        return Err(ApiError::BadRequest("No file URL provided".into()));
    }

    let outcome = state
        .deps
        .ocr
        .recognize_url(&request.file_url)
        .await
        .map_err(|e| ApiError::Upstream(format!("OCR processing failed: {}", e)))?;

    // Persistence is best effort. The caller already has the text in the
    // response body, so a failed write must not fail the request.
    if let Some(document_id) = request.document_id {
        match Document::find_by_id_for_user(document_id, user.user_id, &state.db_pool).await {
            Ok(Some(_)) => {
                if let Err(e) =
                    Document::update_extracted_text(document_id, &outcome.text, &state.db_pool)
                        .await
                {
                    tracing::warn!(
                        document_id = %document_id,
                        error = %e,
                        "Failed to persist extracted text"
                    );
                }
            }
            Ok(None) => {
                tracing::warn!(
                    document_id = %document_id,
                    "Document not found for user, skipping text persistence"
                );
            }
            Err(e) => {
                tracing::warn!(
                    document_id = %document_id,
                    error = %e,
                    "Document lookup failed, skipping text persistence"
                );
            }
        }
    }

    Ok(Json(OcrResponse {
        success: true,
        extracted_text: outcome.text,
        confidence: outcome.confidence.as_str(),
    }))
}

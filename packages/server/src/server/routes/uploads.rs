// Document upload: multipart file -> content hash -> blob store -> row.

use axum::extract::{Extension, Multipart};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::common::utils::generate_content_hash;
use crate::common::ApiError;
use crate::domains::documents::Document;
use crate::domains::submissions::FormSubmission;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

const ALLOWED_CONTENT_TYPES: [&str; 4] = [
    "image/jpeg",
    "image/png",
    "image/webp",
    "application/pdf",
];

#[derive(Serialize)]
pub struct UploadResponse {
    pub id: String,
    pub url: String,
    pub filename: String,
    pub size: i64,
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(rename = "documentType")]
    pub document_type: String,
}

struct UploadedFile {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

pub async fn upload_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file: Option<UploadedFile> = None;
    let mut document_type = String::new();
    let mut form_submission_id: Option<Uuid> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart payload: {}", e)))?
    {
        // Field accessors consume the field, so copy the name out first.
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("document").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            "documentType" => {
                document_type = field.text().await.unwrap_or_default();
            }
            "formSubmissionId" => {
                let text = field.text().await.unwrap_or_default();
                if !text.is_empty() {
                    form_submission_id = Some(
                        Uuid::parse_str(&text)
                            .map_err(|_| ApiError::BadRequest("Invalid submission id".into()))?,
                    );
                }
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| ApiError::BadRequest("No file provided".into()))?;

    if document_type.trim().is_empty() {
        return Err(ApiError::BadRequest("No document type provided".into()));
    }

    if !ALLOWED_CONTENT_TYPES.contains(&file.content_type.as_str()) {
        return Err(ApiError::BadRequest(
            "Invalid file type. Only JPEG, PNG, WebP and PDF files are accepted.".into(),
        ));
    }
    if file.bytes.len() > MAX_FILE_SIZE {
        return Err(ApiError::BadRequest(
            "File too large. Maximum size is 10MB.".into(),
        ));
    }
    if file.bytes.is_empty() {
        return Err(ApiError::BadRequest("Empty file".into()));
    }

    // If the submission is given, it must exist and belong to the caller.
    if let Some(submission_id) = form_submission_id {
        FormSubmission::find_by_id_for_user(submission_id, user.user_id, &state.db_pool)
            .await?
            .ok_or(ApiError::NotFound("Submission"))?;
    }

    let content_hash = generate_content_hash(&file.bytes);
    let file_size = file.bytes.len() as i64;

    // Same bytes uploaded before: reuse the stored blob instead of
    // uploading again. A fresh row is still created so each submission
    // keeps its own link.
    let previous =
        Document::find_by_content_hash(user.user_id, &content_hash, &state.db_pool).await?;

    let file_url = match previous {
        Some(existing) => {
            tracing::info!(
                content_hash = %content_hash,
                existing_document_id = %existing.id,
                "Duplicate upload detected, reusing stored blob"
            );
            existing.file_url
        }
        None => {
            let blob = state
                .deps
                .blob_store
                .upload(&file.file_name, &file.content_type, file.bytes)
                .await
                .map_err(|e| ApiError::Upstream(format!("Upload failed: {}", e)))?;
            blob.url
        }
    };

    let document = Document::create(
        user.user_id,
        form_submission_id,
        &document_type,
        &file_url,
        &file.file_name,
        file_size,
        Some(&content_hash),
        &state.db_pool,
    )
    .await?;

    tracing::info!(
        document_id = %document.id,
        file_size,
        document_type = %document.document_type,
        "Document uploaded"
    );

    Ok(Json(UploadResponse {
        id: document.id.to_string(),
        url: document.file_url,
        filename: document.file_name,
        size: document.file_size,
        content_type: file.content_type,
        document_type: document.document_type,
    }))
}

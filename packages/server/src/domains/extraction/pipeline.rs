// Extraction pipeline orchestration.
//
// Linear flow: filter readable documents -> combine text -> prompt the
// LLM -> pull the JSON object out of the response -> normalize ->
// validate against the form schema. Timing stats ride along because the
// product promises <=5s per document.

use std::time::Instant;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::common::FormType;
use crate::kernel::BaseAI;

use super::normalize::normalize_extracted;
use super::prompt::{combine_documents, system_prompt, user_prompt};
use super::schema::schema_for;

pub const SECONDS_PER_DOCUMENT_TARGET: f64 = 5.0;

/// One uploaded document's OCR output, as submitted to the pipeline.
#[derive(Debug, Clone)]
pub struct DocumentText {
    pub document_type: String,
    pub extracted_text: String,
}

#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub fields: Map<String, Value>,
    pub documents_processed: usize,
    pub total_seconds: f64,
    pub seconds_per_document: f64,
    pub meets_target: bool,
}

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error(
        "No readable text found in uploaded documents. Please upload clear, readable documents."
    )]
    NoReadableText,

    #[error("Failed to parse extraction results. Please try again with clearer documents.")]
    UnparseableResponse,

    #[error(
        "Could not extract information from documents. Please ensure they are clear and contain relevant data."
    )]
    NothingExtracted,

    #[error(transparent)]
    Ai(#[from] anyhow::Error),
}

/// Run the full extraction pipeline over a set of documents.
pub async fn extract_fields(
    ai: &dyn BaseAI,
    form_type: FormType,
    documents: &[DocumentText],
) -> Result<ExtractionOutcome, ExtractionError> {
    let readable: Vec<&DocumentText> = documents
        .iter()
        .filter(|doc| !doc.extracted_text.trim().is_empty())
        .collect();

    if readable.is_empty() {
        return Err(ExtractionError::NoReadableText);
    }

    let schema = schema_for(form_type);
    let combined = combine_documents(&readable);

    tracing::info!(
        document_count = readable.len(),
        combined_length = combined.len(),
        form_type = form_type.as_str(),
        "Starting multi-document extraction"
    );

    let started = Instant::now();

    let response = ai
        .complete_with_system(&system_prompt(schema), &user_prompt(form_type, &combined))
        .await?;

    let preview: String = response.chars().take(200).collect();
    tracing::debug!(response_preview = %preview, "Raw AI response");

    let json_text = extract_json_object(&response).ok_or_else(|| {
        tracing::error!(response_length = response.len(), "No JSON object in AI response");
        ExtractionError::UnparseableResponse
    })?;
    let parsed: Value =
        serde_json::from_str(json_text).map_err(|_| ExtractionError::UnparseableResponse)?;
    let object = parsed
        .as_object()
        .ok_or(ExtractionError::UnparseableResponse)?;

    let normalized = normalize_extracted(object);
    let fields = schema.validate(&normalized);

    if fields.is_empty() {
        return Err(ExtractionError::NothingExtracted);
    }

    let total_seconds = started.elapsed().as_secs_f64();
    let seconds_per_document = total_seconds / readable.len() as f64;

    tracing::info!(
        fields_extracted = fields.len(),
        documents_processed = readable.len(),
        total_seconds = format!("{:.2}", total_seconds),
        seconds_per_document = format!("{:.2}", seconds_per_document),
        "Extraction complete"
    );

    Ok(ExtractionOutcome {
        fields,
        documents_processed: readable.len(),
        total_seconds,
        seconds_per_document,
        meets_target: seconds_per_document <= SECONDS_PER_DOCUMENT_TARGET,
    })
}

/// Pull the first-to-last brace span out of a response. Models regularly
/// wrap the JSON object in prose despite instructions.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "extract form fields") lives in domain functions
// that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseOcr)

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Complete with an explicit system prompt
    /// Default implementation folds the system prompt into the user prompt.
    async fn complete_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        let combined = format!("{}\n\n{}", system, prompt);
        self.complete(&combined).await
    }
}

// =============================================================================
// OCR Trait (Infrastructure)
// =============================================================================

/// Coarse OCR confidence surfaced to the review UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OcrConfidence {
    High,
    Medium,
}

impl OcrConfidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

#[derive(Debug, Clone)]
pub struct OcrOutcome {
    pub text: String,
    pub confidence: OcrConfidence,
}

#[async_trait]
pub trait BaseOcr: Send + Sync {
    /// Run OCR over a file reachable at a public URL
    async fn recognize_url(&self, file_url: &str) -> Result<OcrOutcome>;
}

// =============================================================================
// Blob Store Trait (Infrastructure)
// =============================================================================

#[derive(Debug, Clone)]
pub struct StoredBlob {
    /// Public URL the OCR service can fetch the file from
    pub url: String,
}

#[async_trait]
pub trait BaseBlobStore: Send + Sync {
    /// Upload a file, returning where it landed
    async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredBlob>;
}

// =============================================================================
// Document Verifier Trait (Infrastructure - government verification APIs)
// =============================================================================

/// Fields a verification service can vouch for, normalized to one shape.
/// PAN verification fills name and date of birth only.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[async_trait]
pub trait BaseDocumentVerifier: Send + Sync {
    /// Verify a PAN number against the government registry.
    /// Callers must have collected user consent first.
    async fn verify_pan(&self, pan_number: &str) -> Result<VerificationData>;
}

//! Mock implementations of the kernel traits for tests.
//!
//! Kept as a regular module (not #[cfg(test)]) so integration tests under
//! tests/ can use them too.

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::Mutex;

use crate::kernel::{
    BaseAI, BaseBlobStore, BaseDocumentVerifier, BaseOcr, OcrConfidence, OcrOutcome, StoredBlob,
    VerificationData,
};

/// Mock AI returning a canned response, recording the prompts it saw.
pub struct MockAI {
    pub response: String,
    pub prompts: Mutex<Vec<String>>,
}

impl MockAI {
    pub fn returning(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts
            .lock()
            .expect("prompt log poisoned")
            .push(prompt.to_string());
        Ok(self.response.clone())
    }

    async fn complete_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        self.prompts
            .lock()
            .expect("prompt log poisoned")
            .push(format!("{}\n---\n{}", system, prompt));
        Ok(self.response.clone())
    }
}

/// Mock AI that always fails, for error-path tests.
pub struct FailingAI;

#[async_trait]
impl BaseAI for FailingAI {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        bail!("LLM unavailable")
    }
}

pub struct MockOcr {
    pub text: String,
}

#[async_trait]
impl BaseOcr for MockOcr {
    async fn recognize_url(&self, _file_url: &str) -> Result<OcrOutcome> {
        Ok(OcrOutcome {
            text: self.text.clone(),
            confidence: OcrConfidence::High,
        })
    }
}

pub struct MockBlobStore;

#[async_trait]
impl BaseBlobStore for MockBlobStore {
    async fn upload(
        &self,
        file_name: &str,
        _content_type: &str,
        _bytes: Vec<u8>,
    ) -> Result<StoredBlob> {
        Ok(StoredBlob {
            url: format!("https://blob.test/{}", file_name),
        })
    }
}

pub struct MockVerifier;

#[async_trait]
impl BaseDocumentVerifier for MockVerifier {
    async fn verify_pan(&self, _pan_number: &str) -> Result<VerificationData> {
        Ok(VerificationData {
            full_name: Some("Test Person".to_string()),
            date_of_birth: Some("1990-01-01".to_string()),
            ..Default::default()
        })
    }
}

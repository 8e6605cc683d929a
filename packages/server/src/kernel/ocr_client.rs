use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use ocrspace::{OcrSpaceOptions, OcrSpaceService};

use super::{BaseOcr, OcrConfidence, OcrOutcome};

/// OCR.space implementation of BaseOcr
pub struct OcrSpaceAdapter {
    service: OcrSpaceService,
}

impl OcrSpaceAdapter {
    pub fn new(api_key: String) -> Self {
        let service = OcrSpaceService::new(OcrSpaceOptions::new(api_key));
        Self { service }
    }
}

#[async_trait]
impl BaseOcr for OcrSpaceAdapter {
    async fn recognize_url(&self, file_url: &str) -> Result<OcrOutcome> {
        let response = self
            .service
            .parse_url(file_url)
            .await
            .map_err(|e| anyhow!("{}", e))?;

        if response.is_errored_on_processing {
            bail!("OCR processing failed: {}", response.error_text());
        }

        // Missing results mean a blank page, not a failure.
        let first = response.first_result();
        let text = first.map(|r| r.parsed_text.clone()).unwrap_or_default();

        // Exit code 1 is a clean parse; anything else parsed with warnings.
        let confidence = if first.map(|r| r.file_parse_exit_code) == Some(1) {
            OcrConfidence::High
        } else {
            OcrConfidence::Medium
        };

        tracing::info!(text_length = text.len(), "OCR completed");

        Ok(OcrOutcome { text, confidence })
    }
}

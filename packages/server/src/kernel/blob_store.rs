use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;

use super::{BaseBlobStore, StoredBlob};

const DEFAULT_BASE_URL: &str = "https://blob.vercel-storage.com";

#[derive(Debug, Deserialize)]
struct PutBlobResponse {
    url: String,
}

/// Vercel Blob implementation of BaseBlobStore
///
/// Uploads are public with a random suffix appended to the pathname, so
/// two users uploading "aadhaar.jpg" never collide.
pub struct VercelBlobClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl VercelBlobClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self {
            base_url,
            token,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BaseBlobStore for VercelBlobClient {
    async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredBlob> {
        let url = format!("{}/{}", self.base_url, file_name);

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .header("x-api-version", "7")
            .header("x-add-random-suffix", "1")
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .context("Failed to send upload to blob store")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Blob store returned {}: {}", status, body);
        }

        let blob: PutBlobResponse = response
            .json()
            .await
            .context("Failed to parse blob store response")?;

        Ok(StoredBlob { url: blob.url })
    }
}

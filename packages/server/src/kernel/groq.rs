// AI implementation using Groq-hosted Llama
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to prompt for) lives in domain layers.

use anyhow::{Context, Result};
use async_trait::async_trait;
use rig::completion::Prompt;
use rig::providers::groq;

use super::BaseAI;

/// Extraction runs at low temperature: we want transcription, not prose.
const EXTRACTION_TEMPERATURE: f64 = 0.1;

pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Groq implementation of AI capabilities
#[derive(Clone)]
pub struct GroqClient {
    client: groq::Client,
}

impl GroqClient {
    pub fn new(api_key: &str) -> Self {
        let client = groq::Client::new(api_key);
        Self { client }
    }
}

#[async_trait]
impl BaseAI for GroqClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.complete_with_system("You are a helpful assistant.", prompt)
            .await
    }

    async fn complete_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        tracing::debug!(
            prompt_length = prompt.len(),
            model = DEFAULT_MODEL,
            "Building Groq agent for completion"
        );

        let agent = self
            .client
            .agent(DEFAULT_MODEL)
            .preamble(system)
            .temperature(EXTRACTION_TEMPERATURE)
            .max_tokens(2048)
            .build();

        tracing::info!(model = DEFAULT_MODEL, "Calling Groq API");

        let response = agent
            .prompt(prompt)
            .await
            .map_err(|e| {
                // char-safe preview: OCR text is frequently Devanagari
                let preview: String = prompt.chars().take(200).collect();
                tracing::error!(
                    error = %e,
                    model = DEFAULT_MODEL,
                    prompt_preview = %preview,
                    "Groq API call failed"
                );
                e
            })
            .context("Failed to call Groq API")?;

        tracing::info!(
            response_length = response.len(),
            model = DEFAULT_MODEL,
            "Groq API response received"
        );

        Ok(response)
    }
}

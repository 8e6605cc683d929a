use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub groq_api_key: String,
    /// OCR.space key. The public "helloworld" demo key keeps local
    /// development working without a signup.
    pub ocr_space_api_key: String,
    pub blob_read_write_token: String,
    /// Secret the external auth provider signs session JWTs with.
    pub auth_jwt_secret: String,
    pub api_setu_pan_endpoint: Option<String>,
    pub api_setu_pan_api_key: Option<String>,
    pub api_setu_pan_client_id: Option<String>,
    pub api_setu_pan_client_secret: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            groq_api_key: env::var("GROQ_API_KEY").context("GROQ_API_KEY must be set")?,
            ocr_space_api_key: env::var("OCR_SPACE_API_KEY")
                .unwrap_or_else(|_| "helloworld".to_string()),
            blob_read_write_token: env::var("BLOB_READ_WRITE_TOKEN")
                .context("BLOB_READ_WRITE_TOKEN must be set")?,
            auth_jwt_secret: env::var("AUTH_JWT_SECRET").context("AUTH_JWT_SECRET must be set")?,
            api_setu_pan_endpoint: env::var("API_SETU_PAN_ENDPOINT").ok(),
            api_setu_pan_api_key: env::var("API_SETU_PAN_API_KEY").ok(),
            api_setu_pan_client_id: env::var("API_SETU_PAN_CLIENT_ID").ok(),
            api_setu_pan_client_secret: env::var("API_SETU_PAN_CLIENT_SECRET").ok(),
        })
    }
}

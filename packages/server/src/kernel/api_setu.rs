// API Setu client for government document verification
//
// API Setu is an API marketplace: each service (PAN, Aadhaar, GSTIN) is
// published by a different department with its own endpoint, auth method
// and schema. Only the Income Tax PAN service is wired here. Aadhaar e-KYC
// goes through DigiLocker for consent compliance and is handled at the
// route level (we never forward raw Aadhaar numbers).

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde_json::{json, Value};

use super::{BaseDocumentVerifier, VerificationData};

/// Auth methods PAN publishers use on API Setu.
#[derive(Debug, Clone)]
pub enum PanAuth {
    ApiKey(String),
    OAuth {
        client_id: String,
        client_secret: String,
    },
}

pub struct ApiSetuClient {
    endpoint: String,
    auth: PanAuth,
    client: reqwest::Client,
}

impl ApiSetuClient {
    pub fn new(endpoint: String, auth: PanAuth) -> Self {
        Self {
            endpoint,
            auth,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BaseDocumentVerifier for ApiSetuClient {
    async fn verify_pan(&self, pan_number: &str) -> Result<VerificationData> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "pan_number": pan_number, "consent": true }));

        request = match &self.auth {
            PanAuth::ApiKey(key) => request.header("X-API-Key", key),
            PanAuth::OAuth {
                client_id,
                client_secret,
            } => request.header(
                "Authorization",
                format!("Bearer {}:{}", client_id, client_secret),
            ),
        };

        let response = request
            .send()
            .await
            .context("Failed to reach PAN verification service")?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("PAN verification failed");
            bail!("{}", message);
        }

        let data: Value = response
            .json()
            .await
            .context("Failed to parse PAN verification response")?;

        Ok(normalize_pan_data(&data))
    }
}

/// Normalize a publisher-specific PAN response to the common shape.
/// PAN only vouches for name and date of birth.
fn normalize_pan_data(raw: &Value) -> VerificationData {
    let pick = |keys: &[&str]| -> Option<String> {
        keys.iter()
            .find_map(|k| raw.get(*k).and_then(|v| v.as_str()))
            .map(|s| s.to_string())
    };

    VerificationData {
        full_name: pick(&["name", "full_name"]),
        date_of_birth: pick(&["dob", "date_of_birth"]),
        ..Default::default()
    }
}

/// Mock data returned when no API Setu service is configured (demo mode).
pub fn mock_verification_data(document_type: &str) -> Option<VerificationData> {
    match document_type.to_lowercase().as_str() {
        "aadhaar" => Some(VerificationData {
            full_name: Some("Sample User Name".to_string()),
            date_of_birth: Some("1990-01-01".to_string()),
            gender: Some("Male".to_string()),
            address: Some("Sample Address, City, State - 123456".to_string()),
            state: Some("Maharashtra".to_string()),
            postal_code: Some("400001".to_string()),
            mobile_number: Some("9876543210".to_string()),
            email: Some("user@example.com".to_string()),
        }),
        "pan" => Some(VerificationData {
            full_name: Some("Sample User Name".to_string()),
            date_of_birth: Some("1990-01-01".to_string()),
            ..Default::default()
        }),
        _ => None,
    }
}

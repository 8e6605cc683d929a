// Government document verification.
//
// Live verification covers PAN only. Aadhaar e-KYC requires the
// DigiLocker consent flow, so raw Aadhaar numbers are never forwarded
// upstream: with a verifier configured Aadhaar requests are redirected to
// that flow, and without one both types answer with mock data in demo
// mode.

use axum::extract::Extension;
use axum::Json;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::common::ApiError;
use crate::kernel::{mock_verification_data, VerificationData};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

lazy_static! {
    static ref PAN_FORMAT: Regex = Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("regex is valid");
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub document_type: String,
    pub document_number: String,
    #[serde(default)]
    pub consent: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub success: bool,
    pub verified: bool,
    pub mode: &'static str,
    pub data: VerificationData,
}

pub async fn verify_handler(
    Extension(state): Extension<AppState>,
    _user: AuthUser,
    Json(request): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, ApiError> {
    if !request.consent {
        return Err(ApiError::BadRequest(
            "User consent is required for verification".into(),
        ));
    }

    let document_type = request.document_type.to_lowercase();

    match document_type.as_str() {
        "pan" => {
            let pan = request
                .document_number
                .replace(char::is_whitespace, "")
                .to_uppercase();
            if !PAN_FORMAT.is_match(&pan) {
                return Err(ApiError::BadRequest("Invalid PAN format".into()));
            }

            match &state.deps.verifier {
                Some(verifier) => {
                    let data = verifier
                        .verify_pan(&pan)
                        .await
                        .map_err(|e| ApiError::Upstream(format!("PAN verification failed: {}", e)))?;

                    tracing::info!("PAN verified against government registry");

                    Ok(Json(VerifyResponse {
                        success: true,
                        verified: true,
                        mode: "live",
                        data,
                    }))
                }
                None => demo_response("pan"),
            }
        }
        // Raw Aadhaar numbers never go upstream; e-KYC belongs to the
        // DigiLocker consent flow.
        "aadhaar" => match &state.deps.verifier {
            Some(_) => Err(ApiError::BadRequest(
                "Aadhaar verification requires the DigiLocker consent flow and cannot be \
                 performed with a raw Aadhaar number"
                    .into(),
            )),
            None => demo_response("aadhaar"),
        },
        other => Err(ApiError::BadRequest(format!(
            "Verification not supported for document type: {}. Supported types: pan, aadhaar",
            other
        ))),
    }
}

fn demo_response(document_type: &str) -> Result<Json<VerifyResponse>, ApiError> {
    let data = mock_verification_data(document_type)
        .ok_or_else(|| ApiError::BadRequest("Verification not supported".into()))?;

    tracing::info!(document_type, "Verification running in demo mode");

    Ok(Json(VerifyResponse {
        success: true,
        verified: false,
        mode: "demo",
        data,
    }))
}

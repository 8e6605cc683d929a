// JWT authentication middleware.
//
// Sessions are issued by the external auth provider; this server only
// verifies the HS256 signature with the shared secret. The middleware is
// non-blocking: requests without a valid token continue without an
// AuthUser, and handlers that need one reject with 401 via the extractor.

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{request::Parts, Request},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::common::ApiError;

/// Session token claims as the auth provider issues them.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id as a UUID string
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub aud: String,
    pub exp: usize,
}

/// Authenticated user attached to request extensions.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub email: Option<String>,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(ApiError::Unauthorized)
    }
}

/// Verifies session tokens signed with the auth provider's secret.
pub struct AuthVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&["authenticated"]);
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> Option<Claims> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .ok()
    }
}

/// Extracts the bearer token, verifies it, and adds AuthUser to request
/// extensions. Invalid or missing tokens continue without AuthUser.
pub async fn auth_middleware(
    verifier: Arc<AuthVerifier>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(user) = extract_auth_user(&request, &verifier) {
        tracing::debug!(user_id = %user.user_id, "Authenticated user");
        request.extensions_mut().insert(user);
    } else {
        tracing::debug!("No valid authentication token");
    }

    next.run(request).await
}

fn extract_auth_user(request: &Request<Body>, verifier: &AuthVerifier) -> Option<AuthUser> {
    let auth_header = request.headers().get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;

    // Accept both "Bearer <token>" and the raw token
    let token = auth_str.strip_prefix("Bearer ").unwrap_or(auth_str);

    let claims = verifier.verify(token)?;
    let user_id = Uuid::parse_str(&claims.sub).ok()?;

    Some(AuthUser {
        user_id,
        email: claims.email,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn make_token(secret: &str, user_id: Uuid, aud: &str) -> String {
        let claims = Claims {
            sub: user_id.to_string(),
            email: Some("user@example.com".to_string()),
            aud: aud.to_string(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn request_with_header(value: Option<String>) -> Request<Body> {
        let mut builder = Request::builder();
        if let Some(value) = value {
            builder = builder.header("authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_token_with_bearer() {
        let verifier = AuthVerifier::new("test_secret");
        let user_id = Uuid::new_v4();
        let token = make_token("test_secret", user_id, "authenticated");

        let request = request_with_header(Some(format!("Bearer {}", token)));
        let auth_user = extract_auth_user(&request, &verifier);

        assert!(auth_user.is_some());
        assert_eq!(auth_user.unwrap().user_id, user_id);
    }

    #[test]
    fn test_extract_token_without_bearer() {
        let verifier = AuthVerifier::new("test_secret");
        let user_id = Uuid::new_v4();
        let token = make_token("test_secret", user_id, "authenticated");

        let request = request_with_header(Some(token));
        assert!(extract_auth_user(&request, &verifier).is_some());
    }

    #[test]
    fn test_no_auth_header() {
        let verifier = AuthVerifier::new("test_secret");
        let request = request_with_header(None);
        assert!(extract_auth_user(&request, &verifier).is_none());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let verifier = AuthVerifier::new("test_secret");
        let token = make_token("other_secret", Uuid::new_v4(), "authenticated");

        let request = request_with_header(Some(format!("Bearer {}", token)));
        assert!(extract_auth_user(&request, &verifier).is_none());
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let verifier = AuthVerifier::new("test_secret");
        let token = make_token("test_secret", Uuid::new_v4(), "anon");

        let request = request_with_header(Some(format!("Bearer {}", token)));
        assert!(extract_auth_user(&request, &verifier).is_none());
    }

    #[test]
    fn test_non_uuid_subject_rejected() {
        let verifier = AuthVerifier::new("test_secret");
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            email: None,
            aud: "authenticated".to_string(),
            exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test_secret"),
        )
        .unwrap();

        let request = request_with_header(Some(format!("Bearer {}", token)));
        assert!(extract_auth_user(&request, &verifier).is_none());
    }
}

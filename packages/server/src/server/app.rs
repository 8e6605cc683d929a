//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::{
    ApiSetuClient, BaseDocumentVerifier, GroqClient, OcrSpaceAdapter, PanAuth, ServerDeps,
    VercelBlobClient,
};
use crate::server::middleware::{auth_middleware, AuthVerifier};
use crate::server::routes::{
    create_submission_handler, delete_submission_handler, export_submission_handler,
    extract_handler, get_submission_handler, health_handler, list_documents_handler,
    list_submissions_handler, ocr_handler, update_submission_handler, upload_handler,
    verify_handler,
};

// 10MB file limit plus multipart framing overhead.
const MAX_REQUEST_BODY: usize = 12 * 1024 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router with real infrastructure clients.
pub fn build_app(pool: PgPool, config: &Config) -> Router {
    let ai = Arc::new(GroqClient::new(&config.groq_api_key));
    let ocr = Arc::new(OcrSpaceAdapter::new(config.ocr_space_api_key.clone()));
    let blob_store = Arc::new(VercelBlobClient::new(config.blob_read_write_token.clone()));

    let verifier = build_verifier(config);
    if verifier.is_none() {
        tracing::warn!("No PAN verification service configured, /api/verify runs in demo mode");
    }

    let deps = Arc::new(ServerDeps::new(pool.clone(), ai, ocr, blob_store, verifier));
    let auth = Arc::new(AuthVerifier::new(&config.auth_jwt_secret));

    build_router(
        AppState {
            db_pool: pool,
            deps,
        },
        auth,
    )
}

/// Router assembly, separated from client construction so tests can pass
/// mock dependencies through AppState.
pub fn build_router(state: AppState, auth: Arc<AuthVerifier>) -> Router {
    // Browser clients live on another origin; auth is bearer tokens, not
    // cookies, so a permissive CORS policy is safe here.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/upload", post(upload_handler))
        .route("/api/ocr", post(ocr_handler))
        .route("/api/extract", post(extract_handler))
        .route(
            "/api/form-submissions",
            post(create_submission_handler).get(list_submissions_handler),
        )
        .route(
            "/api/form-submissions/:id",
            get(get_submission_handler)
                .patch(update_submission_handler)
                .delete(delete_submission_handler),
        )
        .route(
            "/api/form-submissions/:id/export",
            get(export_submission_handler),
        )
        .route("/api/documents/:submission_id", get(list_documents_handler))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            auth_middleware(auth.clone(), req, next)
        }))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn build_verifier(config: &Config) -> Option<Arc<dyn BaseDocumentVerifier>> {
    let endpoint = config.api_setu_pan_endpoint.clone()?;

    let auth = if let Some(key) = config.api_setu_pan_api_key.clone() {
        PanAuth::ApiKey(key)
    } else if let (Some(client_id), Some(client_secret)) = (
        config.api_setu_pan_client_id.clone(),
        config.api_setu_pan_client_secret.clone(),
    ) {
        PanAuth::OAuth {
            client_id,
            client_secret,
        }
    } else {
        tracing::warn!("API_SETU_PAN_ENDPOINT set without credentials, ignoring");
        return None;
    };

    Some(Arc::new(ApiSetuClient::new(endpoint, auth)))
}

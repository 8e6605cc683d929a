//! Server dependencies (using traits for testability)
//!
//! Central dependency container handed to route handlers via AppState.
//! All external services use trait abstractions to enable testing.

use sqlx::PgPool;
use std::sync::Arc;

use crate::kernel::{BaseAI, BaseBlobStore, BaseDocumentVerifier, BaseOcr};

/// Server dependencies accessible to handlers (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    /// LLM used by the extraction pipeline
    pub ai: Arc<dyn BaseAI>,
    pub ocr: Arc<dyn BaseOcr>,
    pub blob_store: Arc<dyn BaseBlobStore>,
    /// Government verification service; None runs the verify endpoint in
    /// demo mode with mock data
    pub verifier: Option<Arc<dyn BaseDocumentVerifier>>,
}

impl ServerDeps {
    pub fn new(
        db_pool: PgPool,
        ai: Arc<dyn BaseAI>,
        ocr: Arc<dyn BaseOcr>,
        blob_store: Arc<dyn BaseBlobStore>,
        verifier: Option<Arc<dyn BaseDocumentVerifier>>,
    ) -> Self {
        Self {
            db_pool,
            ai,
            ocr,
            blob_store,
            verifier,
        }
    }
}

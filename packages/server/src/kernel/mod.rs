// Kernel layer: infrastructure adapters for the external collaborators
// (LLM, OCR, blob store, document verification) behind trait seams.

pub mod api_setu;
pub mod blob_store;
pub mod deps;
pub mod groq;
pub mod ocr_client;
pub mod test_dependencies;
pub mod traits;

pub use api_setu::{mock_verification_data, ApiSetuClient, PanAuth};
pub use blob_store::VercelBlobClient;
pub use deps::ServerDeps;
pub use groq::GroqClient;
pub use ocr_client::OcrSpaceAdapter;
pub use traits::{
    BaseAI, BaseBlobStore, BaseDocumentVerifier, BaseOcr, OcrConfidence, OcrOutcome, StoredBlob,
    VerificationData,
};

// HTTP routes
pub mod documents;
pub mod export;
pub mod extract;
pub mod health;
pub mod ocr;
pub mod submissions;
pub mod uploads;
pub mod verify;

pub use documents::list_documents_handler;
pub use export::export_submission_handler;
pub use extract::extract_handler;
pub use health::health_handler;
pub use ocr::ocr_handler;
pub use submissions::{
    create_submission_handler, delete_submission_handler, get_submission_handler,
    list_submissions_handler, update_submission_handler,
};
pub use uploads::upload_handler;
pub use verify::verify_handler;

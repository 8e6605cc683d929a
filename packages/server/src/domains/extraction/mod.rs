// The multi-document field-extraction pipeline:
// combine OCR text -> schema-aware LLM prompt -> parse JSON -> normalize
// fields -> validate against the form schema.

pub mod normalize;
pub mod pipeline;
pub mod prompt;
pub mod schema;

pub use pipeline::{extract_fields, DocumentText, ExtractionError, ExtractionOutcome};
pub use schema::{schema_for, FieldSpec, FormSchema};

// Seva Forms - API Core
//
// Backend for the government-form assistant: citizens upload identity
// documents, OCR and LLM extraction turn them into form fields, and the
// reviewed submission is persisted and exported as a printable document.
//
// Architecture follows domain-driven design; external services (blob store,
// OCR, LLM, verification) sit behind kernel traits.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;

pub mod data;
pub mod models;

pub use data::DocumentData;
pub use models::Document;

mod document;

pub use document::DocumentData;

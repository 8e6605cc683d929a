pub mod documents;
pub mod export;
pub mod extraction;
pub mod submissions;

use sha2::{Digest, Sha256};

/// Generate a content hash for duplicate upload detection
///
/// SHA256 over the raw bytes: the same scan uploaded twice produces the
/// same hash even when the browser renames the file.
pub fn generate_content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

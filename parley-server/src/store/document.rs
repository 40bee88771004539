//! Whole-file JSON document persistence
//!
//! Each collection lives in a single pretty-printed JSON file. Every
//! operation reads the whole document and every mutation rewrites it
//! wholesale; there are no partial updates. Callers serialize their own
//! read-modify-write cycles (see the store types).

use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Load a document, deserializing the entire file
pub async fn load_document<T: DeserializeOwned>(path: &Path) -> io::Result<T> {
    let bytes = tokio::fs::read(path).await?;
    serde_json::from_slice(&bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Save a document, rewriting the entire file as pretty-printed JSON
pub async fn save_document<T: Serialize>(path: &Path, document: &T) -> io::Result<()> {
    let bytes = serde_json::to_vec_pretty(document)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    tokio::fs::write(path, bytes).await
}

/// Create the document with the given empty value if it does not exist
///
/// Existing files are left untouched.
pub async fn ensure_document<T: Serialize>(path: &Path, empty: &T) -> io::Result<()> {
    if tokio::fs::try_exists(path).await? {
        return Ok(());
    }
    save_document(path, empty).await
}

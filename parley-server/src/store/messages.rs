//! Chat message log
//!
//! Messages are persisted as one JSON document (`{"messages": [...]}`),
//! re-read and rewritten wholesale on every append. The log is append-only:
//! insertion order is chronological order and nothing is ever mutated or
//! deleted.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use parley_common::protocol::ChatMessage;

use super::document::{ensure_document, load_document, save_document};

/// Timestamp format for stored messages (local wall-clock, second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// On-disk shape of the message collection
#[derive(Debug, Default, Serialize, Deserialize)]
struct ChatDocument {
    messages: Vec<ChatMessage>,
}

/// File-backed append-only message log
///
/// The mutex serializes every read-modify-write cycle on the document, the
/// same way [`super::AccountStore`] guards the account collection.
#[derive(Clone)]
pub struct MessageLog {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl MessageLog {
    /// Create a log over the given document path
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path: Arc::new(path),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create the document with an empty collection if it does not exist
    pub(crate) async fn ensure(&self) -> io::Result<()> {
        let _guard = self.lock.lock().await;
        ensure_document(self.path.as_ref(), &ChatDocument::default()).await
    }

    /// Append a message stamped with the current local time
    ///
    /// Returns the stored message.
    pub async fn append(&self, username: &str, text: &str) -> io::Result<ChatMessage> {
        let _guard = self.lock.lock().await;
        let mut document: ChatDocument = load_document(self.path.as_ref()).await?;

        let message = ChatMessage {
            username: username.to_string(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            text: text.to_string(),
        };
        document.messages.push(message.clone());

        save_document(self.path.as_ref(), &document).await?;
        Ok(message)
    }

    /// Return the full history in stored (chronological) order
    pub async fn all(&self) -> io::Result<Vec<ChatMessage>> {
        let _guard = self.lock.lock().await;
        let document: ChatDocument = load_document(self.path.as_ref()).await?;
        Ok(document.messages)
    }
}

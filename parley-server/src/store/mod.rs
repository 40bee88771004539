//! File-backed storage for accounts and chat history
//!
//! Both collections are whole-file JSON documents behind narrow store
//! types; nothing outside this module touches the files directly, so the
//! persistence model can be swapped without touching callers.

mod accounts;
mod document;
mod messages;

pub use accounts::{AccountError, AccountStore, UserAccount};
pub use messages::{MessageLog, TIMESTAMP_FORMAT};

use std::io;
use std::path::Path;

/// File name of the account collection inside the data directory
pub const ACCOUNTS_FILENAME: &str = "accounts.json";

/// File name of the message collection inside the data directory
pub const CHAT_FILENAME: &str = "chat.json";

/// Shared handle to both persisted collections
///
/// Cheap to clone; every connection and HTTP request gets its own copy.
#[derive(Clone)]
pub struct Store {
    pub accounts: AccountStore,
    pub chat: MessageLog,
}

/// Create the data directory and both documents, then return the store
///
/// Runs before the accept loops start so every connection sees initialized
/// files. Existing documents are left untouched.
pub async fn init_store(data_dir: &Path) -> io::Result<Store> {
    tokio::fs::create_dir_all(data_dir).await?;

    let store = Store {
        accounts: AccountStore::new(data_dir.join(ACCOUNTS_FILENAME)),
        chat: MessageLog::new(data_dir.join(CHAT_FILENAME)),
    };
    store.accounts.ensure().await?;
    store.chat.ensure().await?;

    Ok(store)
}

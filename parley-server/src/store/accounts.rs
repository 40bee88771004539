//! Account storage and credential verification
//!
//! Accounts are persisted as one JSON document (`{"users": [...]}`) that is
//! re-read and rewritten wholesale on every operation. Records are
//! append-only: accounts are never mutated or deleted, and usernames are
//! unique under case-sensitive exact match.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use parley_common::hash::{generate_salt, hash_password, verify_password};

use super::document::{ensure_document, load_document, save_document};

/// A stored user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub username: String,
    /// Hex-encoded random salt, generated at registration
    pub salt: String,
    /// Hex-encoded salted SHA-256 digest of the password
    pub password_hash: String,
}

/// On-disk shape of the account collection
#[derive(Debug, Default, Serialize, Deserialize)]
struct AccountsDocument {
    users: Vec<UserAccount>,
}

/// Error type for account operations
#[derive(Debug)]
pub enum AccountError {
    /// An account with the requested username already exists
    AlreadyExists,
    /// No account matches the requested username
    UserNotFound,
    /// The password did not match the stored hash
    InvalidPassword,
    /// Storage failure
    Io(io::Error),
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountError::AlreadyExists => write!(f, "username already exists"),
            AccountError::UserNotFound => write!(f, "user not found"),
            AccountError::InvalidPassword => write!(f, "invalid password"),
            AccountError::Io(e) => write!(f, "storage error: {}", e),
        }
    }
}

impl std::error::Error for AccountError {}

impl From<io::Error> for AccountError {
    fn from(err: io::Error) -> Self {
        AccountError::Io(err)
    }
}

/// File-backed credential store
///
/// The mutex serializes every read-modify-write cycle on the document, so
/// concurrent writers cannot lose each other's updates. Reads take the lock
/// too and never observe a torn write.
#[derive(Clone)]
pub struct AccountStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl AccountStore {
    /// Create a store over the given document path
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path: Arc::new(path),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create the document with an empty collection if it does not exist
    pub(crate) async fn ensure(&self) -> io::Result<()> {
        let _guard = self.lock.lock().await;
        ensure_document(self.path.as_ref(), &AccountsDocument::default()).await
    }

    /// Register a new account
    ///
    /// Generates a fresh salt, hashes the password, appends the record, and
    /// persists the full collection. Fails with
    /// [`AccountError::AlreadyExists`] if the username is taken.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AccountError> {
        let _guard = self.lock.lock().await;
        let mut document: AccountsDocument = load_document(self.path.as_ref()).await?;

        if document.users.iter().any(|u| u.username == username) {
            return Err(AccountError::AlreadyExists);
        }

        let salt = generate_salt();
        let password_hash = hash_password(&salt, password);
        document.users.push(UserAccount {
            username: username.to_string(),
            salt,
            password_hash,
        });

        save_document(self.path.as_ref(), &document).await?;
        Ok(())
    }

    /// Check credentials against the stored account
    ///
    /// Scans accounts in stored order; the first exact username match wins.
    /// Read-only.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AccountError> {
        let _guard = self.lock.lock().await;
        let document: AccountsDocument = load_document(self.path.as_ref()).await?;

        match document.users.iter().find(|u| u.username == username) {
            Some(user) if verify_password(&user.salt, &user.password_hash, password) => Ok(()),
            Some(_) => Err(AccountError::InvalidPassword),
            None => Err(AccountError::UserNotFound),
        }
    }

    /// Look up a single account by exact username
    pub async fn find(&self, username: &str) -> io::Result<Option<UserAccount>> {
        let _guard = self.lock.lock().await;
        let document: AccountsDocument = load_document(self.path.as_ref()).await?;
        Ok(document.users.into_iter().find(|u| u.username == username))
    }

    /// Return all stored accounts in stored order
    pub async fn all(&self) -> io::Result<Vec<UserAccount>> {
        let _guard = self.lock.lock().await;
        let document: AccountsDocument = load_document(self.path.as_ref()).await?;
        Ok(document.users)
    }
}

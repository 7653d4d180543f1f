//! Session token persistence
//!
//! The token returned by login/register is kept in the operating system's
//! credential store (Keychain on macOS, Secret Service on Linux, Windows
//! Credential Manager on Windows) so a later process can resume the session.
//! Only the session is persisted; UI state never is.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CollabError, Result};

/// Keyring service name shared by every account
pub const KEYRING_SERVICE: &str = "collabdesk";

/// What is written to the credential store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    /// Backend the token was issued by
    pub backend_url: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(token: impl Into<String>, backend_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            backend_url: backend_url.into(),
            saved_at: Utc::now(),
        }
    }
}

/// Where the session token lives between runs
pub trait SessionStore: Send + Sync + std::fmt::Debug {
    fn save(&self, session: &StoredSession) -> Result<()>;

    /// `Ok(None)` when nothing has been saved
    fn load(&self) -> Result<Option<StoredSession>>;

    /// Remove the saved session; a no-op when there is none
    fn clear(&self) -> Result<()>;
}

/// [`SessionStore`] backed by the OS keyring
///
/// # Examples
///
/// ```no_run
/// use collabdesk::credentials::{KeyringSessionStore, SessionStore, StoredSession};
///
/// let store = KeyringSessionStore::new("default");
/// store.save(&StoredSession::new("token", "https://api.example.com")).unwrap();
/// assert!(store.load().unwrap().is_some());
/// store.clear().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct KeyringSessionStore {
    account: String,
}

impl KeyringSessionStore {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
        }
    }

    fn entry(&self) -> Result<keyring::Entry> {
        Ok(keyring::Entry::new(KEYRING_SERVICE, &self.account)?)
    }
}

impl SessionStore for KeyringSessionStore {
    fn save(&self, session: &StoredSession) -> Result<()> {
        let json = serde_json::to_string(session)?;
        self.entry()?.set_password(&json)?;
        tracing::debug!(account = %self.account, "Saved session to keyring");
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredSession>> {
        match self.entry()?.get_password() {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self) -> Result<()> {
        match self.entry()?.delete_password() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Process-local [`SessionStore`], for tests and `--no-keyring` runs
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<StoredSession>>> {
        self.session
            .lock()
            .map_err(|_| CollabError::Credentials("session store lock poisoned".to_string()))
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, session: &StoredSession) -> Result<()> {
        *self.lock()? = Some(session.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredSession>> {
        Ok(self.lock()?.clone())
    }

    fn clear(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}

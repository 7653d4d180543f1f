//! Authentication state machine
//!
//! ```text
//! Anonymous --login--> Authenticating --ok--> Authenticated --logout--> Anonymous
//!                                     --err--> Error(message)
//! Error --login--> Authenticating
//! ```
//!
//! There is no automatic retry: after a failure the caller decides whether
//! to log in again.

use crate::error::{CollabError, Result};
use crate::models::User;

use super::Store;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthStatus {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated,
    /// Last attempt failed; behaves like `Anonymous` for the next attempt
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub user: Option<User>,
    pub token: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated && self.user.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            AuthStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

pub type AuthStore = Store<AuthState>;

impl Store<AuthState> {
    /// Enter `Authenticating`, refusing when a session exists or an attempt
    /// is already running
    pub fn begin_authenticating(&self) -> Result<()> {
        let mut outcome = Ok(());
        self.update(|s| match s.status {
            AuthStatus::Anonymous | AuthStatus::Error(_) => {
                s.status = AuthStatus::Authenticating;
            }
            AuthStatus::Authenticating => {
                outcome = Err(CollabError::Validation(
                    "sign-in already in progress".to_string(),
                ));
            }
            AuthStatus::Authenticated => {
                outcome = Err(CollabError::Validation(
                    "already signed in; log out first".to_string(),
                ));
            }
        });
        outcome
    }

    pub fn authenticated(&self, user: User, token: Option<String>) {
        self.update(|s| {
            s.status = AuthStatus::Authenticated;
            s.user = Some(user);
            s.token = token;
        });
    }

    /// Record a failed attempt; the message is never empty
    pub fn failed(&self, message: impl Into<String>) {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = "Authentication failed".to_string();
        }
        self.update(|s| {
            s.status = AuthStatus::Error(message);
            s.user = None;
            s.token = None;
        });
    }

    /// Replace the cached user after a profile change
    pub fn set_user(&self, user: User) {
        self.update(|s| {
            if s.status == AuthStatus::Authenticated {
                s.user = Some(user);
            }
        });
    }

    pub fn signed_out(&self) {
        self.reset();
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot().is_authenticated()
    }
}

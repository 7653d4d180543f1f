//! Toast notification surface
//!
//! Mutation failures and selected successes are published here so the view
//! layer can show them. Publishing never fails: with no subscribers the
//! toast is only logged.

use tokio::sync::broadcast;

use crate::error::CollabError;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// One user-visible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

/// Broadcast publisher for [`Toast`]s
///
/// # Examples
///
/// ```
/// use collabdesk::notify::{Notifier, ToastLevel};
///
/// let notifier = Notifier::new();
/// let mut rx = notifier.subscribe();
/// notifier.success("Saved");
/// let toast = rx.try_recv().unwrap();
/// assert_eq!(toast.level, ToastLevel::Success);
/// assert_eq!(toast.message, "Saved");
/// ```
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Toast>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    /// Receive every toast published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<Toast> {
        self.tx.subscribe()
    }

    pub fn notify(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Error => tracing::warn!(message = %toast.message, "toast"),
            _ => tracing::info!(message = %toast.message, "toast"),
        }
        // No receivers is fine.
        let _ = self.tx.send(toast);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(Toast {
            level: ToastLevel::Info,
            message: message.into(),
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(Toast {
            level: ToastLevel::Success,
            message: message.into(),
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Toast {
            level: ToastLevel::Error,
            message: message.into(),
        });
    }

    /// Publish an error toast carrying the error's user-facing message
    pub fn report(&self, error: &CollabError) {
        self.error(error.user_message());
    }
}

//! UI-state stores
//!
//! Each feature area owns one [`Store`] holding view-only state: selections,
//! filters, modal visibility and pagination. Stores are created once by the
//! application context, never persisted, and their setters cannot fail.
//! Feature-specific setters are inherent methods on `Store<FeatureState>`.

use std::sync::Arc;

use tokio::sync::watch;

pub mod activity;
pub mod ai_modules;
pub mod auth;
pub mod chat;
pub mod documents;
pub mod integrations;
pub mod notifications;
pub mod team;
pub mod workflows;

pub use activity::{ActivityState, ActivityStore};
pub use ai_modules::{AiModulesState, AiModulesStore};
pub use auth::{AuthState, AuthStatus, AuthStore};
pub use chat::{ChatState, ChatStore};
pub use documents::{DocumentSort, DocumentsState, DocumentsStore, SortOrder, ViewMode};
pub use integrations::{IntegrationsState, IntegrationsStore};
pub use notifications::{NotificationsState, NotificationsStore, ReadFilter};
pub use team::{TeamState, TeamStore};
pub use workflows::{WorkflowsState, WorkflowsStore};

/// Observable, synchronously updated state container
///
/// Clones share the same state. Every update is applied atomically and
/// wakes all subscribers once.
///
/// # Examples
///
/// ```
/// use collabdesk::stores::Store;
///
/// let store: Store<Vec<String>> = Store::new();
/// let rx = store.subscribe();
/// store.update(|ids| ids.push("d1".to_string()));
/// assert_eq!(store.snapshot(), vec!["d1".to_string()]);
/// assert!(rx.has_changed().unwrap());
/// ```
#[derive(Debug)]
pub struct Store<S> {
    tx: Arc<watch::Sender<S>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            tx: Arc::clone(&self.tx),
        }
    }
}

impl<S: Clone + Default> Default for Store<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Default> Store<S> {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(S::default());
        Self { tx: Arc::new(tx) }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> S {
        self.tx.borrow().clone()
    }

    /// Receiver notified after every update
    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }

    /// Apply `f` to the state as one atomic update
    pub fn update<F: FnOnce(&mut S)>(&self, f: F) {
        self.tx.send_modify(f);
    }

    pub fn set(&self, state: S) {
        self.tx.send_replace(state);
    }

    /// Restore the initial state
    pub fn reset(&self) {
        self.set(S::default());
    }
}

/// Toggle membership of `id`: remove it when present, append it otherwise
///
/// Order of the remaining members is preserved. Toggling an absent id twice
/// restores the original sequence exactly; toggling a present id twice
/// restores the same members with `id` moved to the end.
pub fn toggle_membership(ids: &mut Vec<String>, id: &str) {
    if let Some(pos) = ids.iter().position(|existing| existing == id) {
        ids.remove(pos);
    } else {
        ids.push(id.to_string());
    }
}

/// One instance of every feature store
#[derive(Debug, Clone, Default)]
pub struct Stores {
    pub auth: AuthStore,
    pub documents: DocumentsStore,
    pub chat: ChatStore,
    pub team: TeamStore,
    pub notifications: NotificationsStore,
    pub activity: ActivityStore,
    pub integrations: IntegrationsStore,
    pub ai_modules: AiModulesStore,
    pub workflows: WorkflowsStore,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every store to its initial state
    pub fn reset_all(&self) {
        self.auth.reset();
        self.documents.reset();
        self.chat.reset();
        self.team.reset();
        self.notifications.reset();
        self.activity.reset();
        self.integrations.reset();
        self.ai_modules.reset();
        self.workflows.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_absent_id_twice_restores_sequence() {
        let original = ids(&["a", "b", "c"]);
        let mut selection = original.clone();
        toggle_membership(&mut selection, "z");
        assert_eq!(selection, ids(&["a", "b", "c", "z"]));
        toggle_membership(&mut selection, "z");
        assert_eq!(selection, original);
    }

    #[test]
    fn test_toggle_present_id_twice_restores_members_at_the_end() {
        let mut selection = ids(&["a", "b", "c"]);
        toggle_membership(&mut selection, "b");
        assert_eq!(selection, ids(&["a", "c"]));
        toggle_membership(&mut selection, "b");
        assert_eq!(selection, ids(&["a", "c", "b"]));

        let mut sorted = selection.clone();
        sorted.sort();
        assert_eq!(sorted, ids(&["a", "b", "c"]));
    }

    #[test]
    fn test_toggle_membership_preserves_order() {
        let mut selection = ids(&["a", "b", "c"]);
        toggle_membership(&mut selection, "b");
        assert_eq!(selection, ids(&["a", "c"]));
        toggle_membership(&mut selection, "d");
        assert_eq!(selection, ids(&["a", "c", "d"]));
    }

    #[test]
    fn test_clones_share_state() {
        let store: Store<u32> = Store::new();
        let other = store.clone();
        other.set(5);
        assert_eq!(store.snapshot(), 5);
        store.reset();
        assert_eq!(other.snapshot(), 0);
    }

    #[test]
    fn test_reset_all_restores_every_store() {
        let stores = Stores::new();
        stores.documents.set_search_query("plan");
        stores.team.toggle_member_selection("m1");
        stores.chat.toggle_sidebar();
        stores.reset_all();
        assert_eq!(stores.documents.snapshot(), DocumentsState::default());
        assert_eq!(stores.team.snapshot(), TeamState::default());
        assert_eq!(stores.chat.snapshot(), ChatState::default());
    }
}

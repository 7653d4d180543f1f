//! Chat view state

use super::Store;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatState {
    pub active_session_id: Option<String>,
    pub selected_agent_id: Option<String>,
    pub draft_message: String,
    pub search_query: String,
    pub is_sidebar_open: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            active_session_id: None,
            selected_agent_id: None,
            draft_message: String::new(),
            search_query: String::new(),
            is_sidebar_open: true,
        }
    }
}

pub type ChatStore = Store<ChatState>;

impl Store<ChatState> {
    /// Switching sessions discards the unsent draft
    pub fn set_active_session(&self, session_id: Option<String>) {
        self.update(|s| {
            if s.active_session_id != session_id {
                s.draft_message.clear();
            }
            s.active_session_id = session_id;
        });
    }

    pub fn set_selected_agent(&self, agent_id: Option<String>) {
        self.update(|s| s.selected_agent_id = agent_id);
    }

    pub fn set_draft_message(&self, draft: impl Into<String>) {
        let draft = draft.into();
        self.update(|s| s.draft_message = draft);
    }

    pub fn clear_draft(&self) {
        self.update(|s| s.draft_message.clear());
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.update(|s| s.search_query = query);
    }

    pub fn set_sidebar_open(&self, open: bool) {
        self.update(|s| s.is_sidebar_open = open);
    }

    pub fn toggle_sidebar(&self) {
        self.update(|s| s.is_sidebar_open = !s.is_sidebar_open);
    }

    pub fn clear_filters(&self) {
        self.update(|s| s.search_query.clear());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switching_session_clears_draft() {
        let store = ChatStore::new();
        store.set_active_session(Some("s1".into()));
        store.set_draft_message("half written");
        store.set_active_session(Some("s1".into()));
        assert_eq!(store.snapshot().draft_message, "half written");

        store.set_active_session(Some("s2".into()));
        assert!(store.snapshot().draft_message.is_empty());
    }

    #[test]
    fn test_toggle_sidebar() {
        let store = ChatStore::new();
        assert!(store.snapshot().is_sidebar_open);
        store.toggle_sidebar();
        assert!(!store.snapshot().is_sidebar_open);
    }

    #[test]
    fn test_clear_filters_keeps_draft_and_session() {
        let store = ChatStore::new();
        store.set_active_session(Some("s1".into()));
        store.set_selected_agent(Some("a1".into()));
        store.set_draft_message("hello");
        store.set_search_query("release notes");

        store.clear_filters();

        let state = store.snapshot();
        assert_eq!(state.search_query, ChatState::default().search_query);
        assert_eq!(state.active_session_id.as_deref(), Some("s1"));
        assert_eq!(state.selected_agent_id.as_deref(), Some("a1"));
        assert_eq!(state.draft_message, "hello");
        assert!(state.is_sidebar_open);
    }
}

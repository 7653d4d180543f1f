//! Team management view state

use crate::models::TeamRole;

use super::{toggle_membership, Store};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamState {
    pub selected_member_ids: Vec<String>,
    pub role_filter: Option<TeamRole>,
    pub search_query: String,
    pub page: u32,
    pub is_invite_modal_open: bool,
}

impl Default for TeamState {
    fn default() -> Self {
        Self {
            selected_member_ids: Vec::new(),
            role_filter: None,
            search_query: String::new(),
            page: 1,
            is_invite_modal_open: false,
        }
    }
}

pub type TeamStore = Store<TeamState>;

impl Store<TeamState> {
    pub fn toggle_member_selection(&self, member_id: &str) {
        self.update(|s| toggle_membership(&mut s.selected_member_ids, member_id));
    }

    pub fn clear_selection(&self) {
        self.update(|s| s.selected_member_ids.clear());
    }

    pub fn set_role_filter(&self, role: Option<TeamRole>) {
        self.update(|s| {
            s.role_filter = role;
            s.page = 1;
        });
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.update(|s| {
            s.search_query = query;
            s.page = 1;
        });
    }

    pub fn set_page(&self, page: u32) {
        self.update(|s| s.page = page.max(1));
    }

    pub fn set_invite_modal_open(&self, open: bool) {
        self.update(|s| s.is_invite_modal_open = open);
    }

    pub fn clear_filters(&self) {
        self.update(|s| {
            s.role_filter = None;
            s.search_query.clear();
            s.page = 1;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_filters_keeps_selection() {
        let store = TeamStore::new();
        store.toggle_member_selection("m1");
        store.set_role_filter(Some(TeamRole::Admin));
        store.set_search_query("ana");
        store.set_page(3);

        store.clear_filters();

        let state = store.snapshot();
        assert_eq!(state.role_filter, None);
        assert!(state.search_query.is_empty());
        assert_eq!(state.page, 1);
        assert_eq!(state.selected_member_ids, vec!["m1".to_string()]);
    }
}

//! AI module catalogue view state

use crate::models::AiModuleStatus;

use super::Store;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AiModulesState {
    pub selected_module_id: Option<String>,
    pub status_filter: Option<AiModuleStatus>,
    pub search_query: String,
    pub is_create_modal_open: bool,
}

pub type AiModulesStore = Store<AiModulesState>;

impl Store<AiModulesState> {
    pub fn select_module(&self, module_id: Option<String>) {
        self.update(|s| s.selected_module_id = module_id);
    }

    pub fn set_status_filter(&self, status: Option<AiModuleStatus>) {
        self.update(|s| s.status_filter = status);
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.update(|s| s.search_query = query);
    }

    pub fn set_create_modal_open(&self, open: bool) {
        self.update(|s| s.is_create_modal_open = open);
    }

    pub fn clear_filters(&self) {
        self.update(|s| {
            s.status_filter = None;
            s.search_query.clear();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_filters_keeps_selection_and_modal() {
        let store = AiModulesStore::new();
        store.select_module(Some("m1".into()));
        store.set_create_modal_open(true);
        store.set_status_filter(Some(AiModuleStatus::Pending));
        store.set_search_query("summar");

        store.clear_filters();

        let state = store.snapshot();
        let defaults = AiModulesState::default();
        assert_eq!(state.status_filter, defaults.status_filter);
        assert_eq!(state.search_query, defaults.search_query);
        assert_eq!(state.selected_module_id.as_deref(), Some("m1"));
        assert!(state.is_create_modal_open);
    }
}

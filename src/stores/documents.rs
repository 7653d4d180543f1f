//! Document browser view state

use super::{toggle_membership, Store};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentSort {
    Name,
    #[default]
    UpdatedAt,
    Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentsState {
    pub selected_folder_ids: Vec<String>,
    pub selected_document_id: Option<String>,
    pub search_query: String,
    pub file_type_filter: Option<String>,
    pub tag_filter: Option<String>,
    pub sort_by: DocumentSort,
    pub sort_order: SortOrder,
    pub view_mode: ViewMode,
    pub page: u32,
    pub is_upload_modal_open: bool,
    pub is_create_folder_modal_open: bool,
}

impl Default for DocumentsState {
    fn default() -> Self {
        Self {
            selected_folder_ids: Vec::new(),
            selected_document_id: None,
            search_query: String::new(),
            file_type_filter: None,
            tag_filter: None,
            sort_by: DocumentSort::default(),
            sort_order: SortOrder::default(),
            view_mode: ViewMode::default(),
            page: 1,
            is_upload_modal_open: false,
            is_create_folder_modal_open: false,
        }
    }
}

pub type DocumentsStore = Store<DocumentsState>;

impl Store<DocumentsState> {
    pub fn toggle_folder_selection(&self, folder_id: &str) {
        self.update(|s| toggle_membership(&mut s.selected_folder_ids, folder_id));
    }

    pub fn select_document(&self, document_id: Option<String>) {
        self.update(|s| s.selected_document_id = document_id);
    }

    /// Drop folder and document selection
    pub fn clear_selection(&self) {
        self.update(|s| {
            s.selected_folder_ids.clear();
            s.selected_document_id = None;
        });
    }

    /// Changing the search goes back to the first page
    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.update(|s| {
            s.search_query = query;
            s.page = 1;
        });
    }

    pub fn set_file_type_filter(&self, file_type: Option<String>) {
        self.update(|s| {
            s.file_type_filter = file_type;
            s.page = 1;
        });
    }

    pub fn set_tag_filter(&self, tag: Option<String>) {
        self.update(|s| {
            s.tag_filter = tag;
            s.page = 1;
        });
    }

    pub fn set_sorting(&self, sort_by: DocumentSort, sort_order: SortOrder) {
        self.update(|s| {
            s.sort_by = sort_by;
            s.sort_order = sort_order;
        });
    }

    pub fn set_view_mode(&self, mode: ViewMode) {
        self.update(|s| s.view_mode = mode);
    }

    pub fn set_page(&self, page: u32) {
        self.update(|s| s.page = page.max(1));
    }

    pub fn set_upload_modal_open(&self, open: bool) {
        self.update(|s| s.is_upload_modal_open = open);
    }

    pub fn set_create_folder_modal_open(&self, open: bool) {
        self.update(|s| s.is_create_folder_modal_open = open);
    }

    /// Restore search, type and tag filters and go back to page 1
    pub fn clear_filters(&self) {
        let initial = DocumentsState::default();
        self.update(|s| {
            s.search_query = initial.search_query;
            s.file_type_filter = initial.file_type_filter;
            s.tag_filter = initial.tag_filter;
            s.page = initial.page;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_folder_selection_twice_restores_selection() {
        let store = DocumentsStore::new();
        store.toggle_folder_selection("f1");
        store.toggle_folder_selection("f2");
        let before = store.snapshot().selected_folder_ids;

        store.toggle_folder_selection("f3");
        store.toggle_folder_selection("f3");
        assert_eq!(store.snapshot().selected_folder_ids, before);

        store.toggle_folder_selection("f1");
        store.toggle_folder_selection("f1");
        assert_eq!(
            store.snapshot().selected_folder_ids,
            vec!["f2".to_string(), "f1".to_string()]
        );
    }

    #[test]
    fn test_clear_filters_restores_initial_filters_and_page() {
        let store = DocumentsStore::new();
        store.set_search_query("budget");
        store.set_file_type_filter(Some("pdf".into()));
        store.set_tag_filter(Some("finance".into()));
        store.set_page(4);
        store.set_view_mode(ViewMode::List);

        store.clear_filters();

        let state = store.snapshot();
        let initial = DocumentsState::default();
        assert_eq!(state.search_query, initial.search_query);
        assert_eq!(state.file_type_filter, initial.file_type_filter);
        assert_eq!(state.tag_filter, initial.tag_filter);
        assert_eq!(state.page, 1);
        // not a filter
        assert_eq!(state.view_mode, ViewMode::List);
    }

    #[test]
    fn test_set_sorting_updates_both_fields_in_one_change() {
        let store = DocumentsStore::new();
        let mut rx = store.subscribe();
        rx.borrow_and_update();

        store.set_sorting(DocumentSort::Name, SortOrder::Asc);

        assert!(rx.has_changed().unwrap());
        let state = rx.borrow_and_update().clone();
        assert_eq!(state.sort_by, DocumentSort::Name);
        assert_eq!(state.sort_order, SortOrder::Asc);
    }

    #[test]
    fn test_page_never_drops_below_one() {
        let store = DocumentsStore::new();
        store.set_page(0);
        assert_eq!(store.snapshot().page, 1);
    }
}

//! Notification centre view state

use crate::models::NotificationType;

use super::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadFilter {
    #[default]
    All,
    Unread,
    Read,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationsState {
    pub read_filter: ReadFilter,
    pub type_filter: Option<NotificationType>,
    pub page: u32,
    pub is_settings_open: bool,
}

impl Default for NotificationsState {
    fn default() -> Self {
        Self {
            read_filter: ReadFilter::All,
            type_filter: None,
            page: 1,
            is_settings_open: false,
        }
    }
}

pub type NotificationsStore = Store<NotificationsState>;

impl Store<NotificationsState> {
    pub fn set_read_filter(&self, filter: ReadFilter) {
        self.update(|s| {
            s.read_filter = filter;
            s.page = 1;
        });
    }

    pub fn set_type_filter(&self, notification_type: Option<NotificationType>) {
        self.update(|s| {
            s.type_filter = notification_type;
            s.page = 1;
        });
    }

    pub fn set_page(&self, page: u32) {
        self.update(|s| s.page = page.max(1));
    }

    pub fn set_settings_open(&self, open: bool) {
        self.update(|s| s.is_settings_open = open);
    }

    pub fn clear_filters(&self) {
        self.update(|s| {
            s.read_filter = ReadFilter::All;
            s.type_filter = None;
            s.page = 1;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_filters() {
        let store = NotificationsStore::new();
        store.set_read_filter(ReadFilter::Unread);
        store.set_type_filter(Some(NotificationType::Mention));
        store.set_page(2);
        store.set_settings_open(true);

        store.clear_filters();

        let state = store.snapshot();
        assert_eq!(state.read_filter, ReadFilter::All);
        assert_eq!(state.type_filter, None);
        assert_eq!(state.page, 1);
        assert!(state.is_settings_open);
    }
}

//! Activity feed view state

use chrono::NaiveDate;

use crate::models::ActivityType;

use super::Store;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityState {
    pub type_filter: Option<ActivityType>,
    pub search_query: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub page: u32,
}

impl Default for ActivityState {
    fn default() -> Self {
        Self {
            type_filter: None,
            search_query: String::new(),
            date_from: None,
            date_to: None,
            page: 1,
        }
    }
}

pub type ActivityStore = Store<ActivityState>;

impl Store<ActivityState> {
    pub fn set_type_filter(&self, activity_type: Option<ActivityType>) {
        self.update(|s| {
            s.type_filter = activity_type;
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

    /// Set both bounds at once; reversed bounds are swapped
    pub fn set_date_range(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        let (from, to) = match (from, to) {
            (Some(a), Some(b)) if a > b => (Some(b), Some(a)),
            other => other,
        };
        self.update(|s| {
            s.date_from = from;
            s.date_to = to;
            s.page = 1;
        });
    }

    pub fn set_page(&self, page: u32) {
        self.update(|s| s.page = page.max(1));
    }

    pub fn clear_filters(&self) {
        self.set(ActivityState::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_set_date_range_orders_bounds() {
        let store = ActivityStore::new();
        store.set_date_range(Some(day(20)), Some(day(1)));
        let state = store.snapshot();
        assert_eq!(state.date_from, Some(day(1)));
        assert_eq!(state.date_to, Some(day(20)));
    }

    #[test]
    fn test_clear_filters() {
        let store = ActivityStore::new();
        store.set_type_filter(Some(ActivityType::Chat));
        store.set_search_query("export");
        store.set_date_range(Some(day(1)), None);
        store.set_page(5);
        store.clear_filters();
        assert_eq!(store.snapshot(), ActivityState::default());
        assert_eq!(store.snapshot().page, 1);
    }
}

//! Query result snapshots

use crate::error::{CollabError, Result};

/// What a data-query hook hands to the view layer
///
/// A failed fetch keeps the last known `data` and sets `error`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    /// Last successfully fetched value, if any
    pub data: Option<T>,
    /// No data yet and a fetch is in flight
    pub is_loading: bool,
    /// A fetch (initial or background) is in flight
    pub is_fetching: bool,
    /// The returned data is past its freshness window
    pub is_stale: bool,
    /// Error of the most recent fetch attempt
    pub error: Option<CollabError>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            is_fetching: false,
            is_stale: false,
            error: None,
        }
    }
}

impl<T> QueryState<T> {
    pub fn is_success(&self) -> bool {
        self.data.is_some() && self.error.is_none()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Data of a successful fetch, or the fetch error
    ///
    /// Stale data that failed to refresh counts as an error.
    pub fn into_result(self) -> Result<T> {
        match (self.data, self.error) {
            (_, Some(error)) => Err(error),
            (Some(data), None) => Ok(data),
            (None, None) => Err(CollabError::Network("request still in flight".to_string())),
        }
    }

    /// Transform the data while keeping the status flags
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> QueryState<U> {
        QueryState {
            data: self.data.map(f),
            is_loading: self.is_loading,
            is_fetching: self.is_fetching,
            is_stale: self.is_stale,
            error: self.error,
        }
    }
}

impl<T: Clone + Default> QueryState<T> {
    /// Data or the type's empty value, for list views
    pub fn data_or_default(&self) -> T {
        self.data.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state: QueryState<Vec<u8>> = QueryState::default();
        assert!(!state.is_loading);
        assert!(!state.is_success());
        assert!(state.data_or_default().is_empty());
    }

    #[test]
    fn test_map_preserves_flags() {
        let state = QueryState {
            data: Some(vec![1, 2, 3]),
            is_stale: true,
            error: Some(CollabError::Network("offline".into())),
            ..Default::default()
        };
        let mapped = state.map(|v| v.len());
        assert_eq!(mapped.data, Some(3));
        assert!(mapped.is_stale);
        assert!(mapped.is_error());
    }

    #[test]
    fn test_into_result_prefers_error() {
        let state = QueryState {
            data: Some(1),
            error: Some(CollabError::NotFound("gone".into())),
            ..Default::default()
        };
        assert!(state.into_result().is_err());

        let ok = QueryState {
            data: Some(1),
            ..Default::default()
        };
        assert_eq!(ok.into_result().unwrap(), 1);
    }
}

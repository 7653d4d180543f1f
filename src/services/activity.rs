//! Activity log
//!
//! The log lives under `/activities`; the older `/activity` path is not used.

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::activity::NewActivity;
use crate::models::{ActivityLog, ActivityPage, ActivityQuery, ActivityStats};

use super::require_text;

#[derive(Debug, Clone)]
pub struct ActivityService {
    api: ApiClient,
}

impl ActivityService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /activities` → `{activities, total}`
    pub async fn list(&self, query: &ActivityQuery) -> Result<ActivityPage> {
        self.api
            .get_with_query("/activities", &query.to_params())
            .await
    }

    /// `GET /activities/stats`
    pub async fn stats(&self) -> Result<ActivityStats> {
        self.api.get("/activities/stats").await
    }

    /// `POST /activities`; entries are never edited or removed client-side
    pub async fn log(&self, entry: &NewActivity) -> Result<ActivityLog> {
        let mut entry = entry.clone();
        entry.action = require_text("activity action", &entry.action)?;
        self.api.post("/activities", &entry).await
    }
}

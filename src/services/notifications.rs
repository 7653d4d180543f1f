//! In-app notifications

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::notification::NotificationSettingsUpdate;
use crate::models::{Notification, NotificationSettings};

use super::path_id;

#[derive(Debug, Clone)]
pub struct NotificationService {
    api: ApiClient,
}

impl NotificationService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /notifications`, optionally restricted to unread items
    pub async fn list(&self, unread_only: bool) -> Result<Vec<Notification>> {
        let params = if unread_only {
            vec![("unreadOnly", "true".to_string())]
        } else {
            Vec::new()
        };
        self.api.get_with_query("/notifications", &params).await
    }

    /// `GET /notifications/unread-count` → `{count}`
    pub async fn unread_count(&self) -> Result<u64> {
        self.api
            .get_field("/notifications/unread-count", "count")
            .await
    }

    /// `PATCH /notifications/:id/read`
    pub async fn mark_read(&self, id: &str) -> Result<()> {
        let id = path_id("notification", id)?;
        self.api
            .patch_empty(&format!("/notifications/{}/read", id))
            .await
    }

    /// `POST /notifications/mark-all-read`
    pub async fn mark_all_read(&self) -> Result<()> {
        self.api.post_empty("/notifications/mark-all-read").await
    }

    /// `DELETE /notifications/:id`
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = path_id("notification", id)?;
        self.api.delete(&format!("/notifications/{}", id)).await
    }

    /// `GET /notifications/settings`
    pub async fn settings(&self) -> Result<NotificationSettings> {
        self.api.get("/notifications/settings").await
    }

    /// `PATCH /notifications/settings`
    pub async fn update_settings(
        &self,
        update: &NotificationSettingsUpdate,
    ) -> Result<NotificationSettings> {
        self.api.patch("/notifications/settings", update).await
    }
}

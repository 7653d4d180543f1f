//! In-app notifications

use crate::context::AppContext;
use crate::error::Result;
use crate::models::notification::NotificationSettingsUpdate;
use crate::models::{Notification, NotificationSettings};
use crate::query::{Mutation, QueryState};

use super::{fetcher, keys};

#[derive(Debug, Clone)]
pub struct NotificationsHook {
    ctx: AppContext,
}

impl NotificationsHook {
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn list(&self, unread_only: bool) -> QueryState<Vec<Notification>> {
        let service = self.ctx.services().notifications.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::notification_list(unread_only),
                fetcher(service, move |s| async move { s.list(unread_only).await }),
            )
            .await
    }

    pub async fn unread_count(&self) -> QueryState<u64> {
        let service = self.ctx.services().notifications.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::unread_count(),
                fetcher(service, |s| async move { s.unread_count().await }),
            )
            .await
    }

    pub async fn settings(&self) -> QueryState<NotificationSettings> {
        let service = self.ctx.services().notifications.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::notification_settings(),
                fetcher(service, |s| async move { s.settings().await }),
            )
            .await
    }

    pub async fn mark_read(&self, id: &str) -> Result<()> {
        let service = &self.ctx.services().notifications;
        Mutation::new("mark_notification_read")
            .invalidates(keys::notifications())
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.mark_read(id)
            })
            .await
    }

    pub async fn mark_all_read(&self) -> Result<()> {
        let service = &self.ctx.services().notifications;
        Mutation::new("mark_all_notifications_read")
            .invalidates(keys::notifications())
            .success_toast("All notifications marked as read")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.mark_all_read()
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let service = &self.ctx.services().notifications;
        Mutation::new("delete_notification")
            .invalidates(keys::notifications())
            .run(self.ctx.query_client(), self.ctx.notifier(), || service.delete(id))
            .await
    }

    pub async fn update_settings(
        &self,
        update: &NotificationSettingsUpdate,
    ) -> Result<NotificationSettings> {
        let service = &self.ctx.services().notifications;
        let settings = Mutation::new("update_notification_settings")
            .invalidates(keys::notification_settings())
            .writes_to(|_: &NotificationSettings| keys::notification_settings())
            .success_toast("Notification settings saved")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.update_settings(update)
            })
            .await?;
        self.ctx.stores().notifications.set_settings_open(false);
        Ok(settings)
    }
}

//! Activity feed

use crate::context::AppContext;
use crate::error::Result;
use crate::models::activity::NewActivity;
use crate::models::{ActivityLog, ActivityPage, ActivityQuery, ActivityStats};
use crate::query::{Mutation, QueryState};

use super::{fetcher, keys};

#[derive(Debug, Clone)]
pub struct ActivityHook {
    ctx: AppContext,
}

impl ActivityHook {
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn list(&self, query: &ActivityQuery) -> QueryState<ActivityPage> {
        let service = self.ctx.services().activity.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::activity_list(query),
                fetcher((service, query.clone()), |(s, q)| async move {
                    s.list(&q).await
                }),
            )
            .await
    }

    /// Page described by the activity store's current filters
    pub async fn filtered(&self) -> QueryState<ActivityPage> {
        let state = self.ctx.stores().activity.snapshot();
        let query = ActivityQuery {
            activity_type: state.type_filter,
            page: Some(state.page),
            limit: Some(self.ctx.config().ui.page_size),
        };
        self.list(&query).await
    }

    pub async fn stats(&self) -> QueryState<ActivityStats> {
        let service = self.ctx.services().activity.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::activity_stats(),
                fetcher(service, |s| async move { s.stats().await }),
            )
            .await
    }

    /// Append an entry; the feed is never edited client-side
    pub async fn log(&self, entry: &NewActivity) -> Result<ActivityLog> {
        let service = &self.ctx.services().activity;
        Mutation::new("log_activity")
            .invalidates(keys::dashboard())
            .invalidates(keys::activity())
            .run(self.ctx.query_client(), self.ctx.notifier(), || service.log(entry))
            .await
    }
}

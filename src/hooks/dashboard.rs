//! Dashboard summary
//!
//! Documents, members and recent activity are requested concurrently and
//! awaited together. Only the documents request is critical: a failure
//! there fails the whole summary, while member and activity failures are
//! logged and replaced with empty results.

use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::error::Result;
use crate::models::{ActivityLog, ActivityQuery, DocumentQuery};
use crate::query::QueryState;
use crate::services::{ActivityService, DocumentService, TeamService};

use super::{fetcher, keys};

/// Number of entries in `recent_activities`
pub const RECENT_ACTIVITY_LIMIT: u32 = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_documents: usize,
    pub total_members: usize,
    pub recent_activities: Vec<ActivityLog>,
    /// Sum of document sizes, in bytes
    pub storage_used: u64,
}

/// Fetch the three sources concurrently and join them
pub async fn load_dashboard_stats(
    documents: &DocumentService,
    team: &TeamService,
    activity: &ActivityService,
) -> Result<DashboardStats> {
    let all_documents = DocumentQuery::default();
    let recent = ActivityQuery {
        activity_type: None,
        page: Some(1),
        limit: Some(RECENT_ACTIVITY_LIMIT),
    };

    let (documents, members, activities) = futures::join!(
        documents.list(&all_documents),
        team.members(),
        activity.list(&recent),
    );

    let documents = documents?;
    let members = members.unwrap_or_else(|e| {
        tracing::warn!("Dashboard: members unavailable: {}", e);
        Vec::new()
    });
    let recent_activities = activities.map(|page| page.activities).unwrap_or_else(|e| {
        tracing::warn!("Dashboard: activity unavailable: {}", e);
        Vec::new()
    });

    Ok(DashboardStats {
        total_documents: documents.len(),
        total_members: members.len(),
        storage_used: documents.iter().map(|d| d.size).sum(),
        recent_activities,
    })
}

#[derive(Debug, Clone)]
pub struct DashboardHook {
    ctx: AppContext,
}

impl DashboardHook {
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn stats(&self) -> QueryState<DashboardStats> {
        let services = self.ctx.services();
        let sources = (
            services.documents.clone(),
            services.team.clone(),
            services.activity.clone(),
        );
        self.ctx
            .query_client()
            .fetch_query(
                keys::dashboard_stats(),
                fetcher(sources, |(documents, team, activity)| async move {
                    load_dashboard_stats(&documents, &team, &activity).await
                }),
            )
            .await
    }
}

//! Third-party integrations

use crate::context::AppContext;
use crate::error::Result;
use crate::models::integration::{IntegrationUpdate, NewIntegration};
use crate::models::{Integration, IntegrationSyncResult, IntegrationTestResult};
use crate::query::{Mutation, QueryState};

use super::{fetcher, keys};

#[derive(Debug, Clone)]
pub struct IntegrationsHook {
    ctx: AppContext,
}

impl IntegrationsHook {
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn list(&self) -> QueryState<Vec<Integration>> {
        let service = self.ctx.services().integrations.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::integration_list(),
                fetcher(service, |s| async move { s.list().await }),
            )
            .await
    }

    pub async fn get(&self, id: &str) -> QueryState<Integration> {
        let service = self.ctx.services().integrations.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::integration(id),
                fetcher((service, id.to_string()), |(s, id)| async move {
                    s.get(&id).await
                }),
            )
            .await
    }

    pub async fn create(&self, input: &NewIntegration) -> Result<Integration> {
        let service = &self.ctx.services().integrations;
        Mutation::new("create_integration")
            .invalidates(keys::integrations())
            .writes_to(|i: &Integration| keys::integration(&i.id))
            .success_toast("Integration added")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.create(input)
            })
            .await
    }

    pub async fn update(&self, id: &str, update: &IntegrationUpdate) -> Result<Integration> {
        let service = &self.ctx.services().integrations;
        let integration = Mutation::new("update_integration")
            .invalidates(keys::integrations())
            .writes_to(|i: &Integration| keys::integration(&i.id))
            .success_toast("Integration saved")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.update(id, update)
            })
            .await?;
        self.ctx.stores().integrations.close_config();
        Ok(integration)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let service = &self.ctx.services().integrations;
        Mutation::new("delete_integration")
            .removes(keys::integration(id))
            .invalidates(keys::integrations())
            .success_toast("Integration removed")
            .run(self.ctx.query_client(), self.ctx.notifier(), || service.delete(id))
            .await?;

        let store = &self.ctx.stores().integrations;
        if store.snapshot().selected_integration_id.as_deref() == Some(id) {
            store.select_integration(None);
        }
        Ok(())
    }

    /// Ask the backend to test the connection; status may change as a result
    pub async fn test(&self, id: &str) -> Result<IntegrationTestResult> {
        let service = &self.ctx.services().integrations;
        Mutation::new("test_integration")
            .invalidates(keys::integrations())
            .run(self.ctx.query_client(), self.ctx.notifier(), || service.test(id))
            .await
    }

    pub async fn sync(&self, id: &str) -> Result<IntegrationSyncResult> {
        let service = &self.ctx.services().integrations;
        Mutation::new("sync_integration")
            .invalidates(keys::integrations())
            .success_toast("Sync started")
            .run(self.ctx.query_client(), self.ctx.notifier(), || service.sync(id))
            .await
    }
}

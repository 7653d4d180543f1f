//! AI modules

use crate::context::AppContext;
use crate::error::Result;
use crate::models::ai_module::{AiModuleUpdate, FeatureToggle, NewAiModule};
use crate::models::{AiModule, AiModuleLog, AiModuleStats, AiModuleTestResult};
use crate::query::{Mutation, QueryState};

use super::{fetcher, keys};

#[derive(Debug, Clone)]
pub struct AiModulesHook {
    ctx: AppContext,
}

impl AiModulesHook {
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn list(&self) -> QueryState<Vec<AiModule>> {
        let service = self.ctx.services().ai_modules.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::ai_module_list(),
                fetcher(service, |s| async move { s.list().await }),
            )
            .await
    }

    pub async fn get(&self, id: &str) -> QueryState<AiModule> {
        let service = self.ctx.services().ai_modules.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::ai_module(id),
                fetcher((service, id.to_string()), |(s, id)| async move {
                    s.get(&id).await
                }),
            )
            .await
    }

    pub async fn stats(&self, id: &str) -> QueryState<AiModuleStats> {
        let service = self.ctx.services().ai_modules.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::ai_module_stats(id),
                fetcher((service, id.to_string()), |(s, id)| async move {
                    s.stats(&id).await
                }),
            )
            .await
    }

    pub async fn logs(&self, id: &str) -> QueryState<Vec<AiModuleLog>> {
        let service = self.ctx.services().ai_modules.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::ai_module_logs(id),
                fetcher((service, id.to_string()), |(s, id)| async move {
                    s.logs(&id).await
                }),
            )
            .await
    }

    pub async fn create(&self, input: &NewAiModule) -> Result<AiModule> {
        let service = &self.ctx.services().ai_modules;
        let module = Mutation::new("create_ai_module")
            .invalidates(keys::ai_modules())
            .writes_to(|m: &AiModule| keys::ai_module(&m.id))
            .success_toast("Module created")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.create(input)
            })
            .await?;
        self.ctx.stores().ai_modules.set_create_modal_open(false);
        Ok(module)
    }

    pub async fn update(&self, id: &str, update: &AiModuleUpdate) -> Result<AiModule> {
        let service = &self.ctx.services().ai_modules;
        Mutation::new("update_ai_module")
            .invalidates(keys::ai_modules())
            .writes_to(|m: &AiModule| keys::ai_module(&m.id))
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.update(id, update)
            })
            .await
    }

    /// Partial feature update; features not listed keep their state
    pub async fn update_features(&self, id: &str, features: Vec<FeatureToggle>) -> Result<AiModule> {
        let service = &self.ctx.services().ai_modules;
        Mutation::new("update_ai_module_features")
            .invalidates(keys::ai_modules())
            .writes_to(|m: &AiModule| keys::ai_module(&m.id))
            .success_toast("Features updated")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.update_features(id, features.clone())
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let service = &self.ctx.services().ai_modules;
        Mutation::new("delete_ai_module")
            .removes(keys::ai_module(id))
            .removes(keys::ai_module_stats(id))
            .removes(keys::ai_module_logs(id))
            .invalidates(keys::ai_modules())
            .success_toast("Module deleted")
            .run(self.ctx.query_client(), self.ctx.notifier(), || service.delete(id))
            .await?;

        let store = &self.ctx.stores().ai_modules;
        if store.snapshot().selected_module_id.as_deref() == Some(id) {
            store.select_module(None);
        }
        Ok(())
    }

    pub async fn test(&self, id: &str) -> Result<AiModuleTestResult> {
        let service = &self.ctx.services().ai_modules;
        Mutation::new("test_ai_module")
            .invalidates(keys::ai_module_stats(id))
            .invalidates(keys::ai_module_logs(id))
            .run(self.ctx.query_client(), self.ctx.notifier(), || service.test(id))
            .await
    }
}

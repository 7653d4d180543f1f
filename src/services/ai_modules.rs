//! AI module management
//!
//! Raw bodies throughout; the `{module}` wrapper is not accepted.

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::ai_module::{AiModuleUpdate, FeatureToggle, FeaturesUpdate, NewAiModule};
use crate::models::{AiModule, AiModuleLog, AiModuleStats, AiModuleTestResult};

use super::{path_id, require_text};

#[derive(Debug, Clone)]
pub struct AiModuleService {
    api: ApiClient,
}

impl AiModuleService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /ai-modules`
    pub async fn list(&self) -> Result<Vec<AiModule>> {
        self.api.get("/ai-modules").await
    }

    /// `GET /ai-modules/:id`
    pub async fn get(&self, id: &str) -> Result<AiModule> {
        let id = path_id("module", id)?;
        self.api.get(&format!("/ai-modules/{}", id)).await
    }

    /// `POST /ai-modules`
    pub async fn create(&self, input: &NewAiModule) -> Result<AiModule> {
        let mut input = input.clone();
        input.name = require_text("module name", &input.name)?;
        self.api.post("/ai-modules", &input).await
    }

    /// `PATCH /ai-modules/:id`
    pub async fn update(&self, id: &str, update: &AiModuleUpdate) -> Result<AiModule> {
        let id = path_id("module", id)?;
        self.api.patch(&format!("/ai-modules/{}", id), update).await
    }

    /// `DELETE /ai-modules/:id`
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = path_id("module", id)?;
        self.api.delete(&format!("/ai-modules/{}", id)).await
    }

    /// `POST /ai-modules/:id/test`
    pub async fn test(&self, id: &str) -> Result<AiModuleTestResult> {
        let id = path_id("module", id)?;
        self.api
            .post_empty_for(&format!("/ai-modules/{}/test", id))
            .await
    }

    /// `GET /ai-modules/:id/stats`
    pub async fn stats(&self, id: &str) -> Result<AiModuleStats> {
        let id = path_id("module", id)?;
        self.api.get(&format!("/ai-modules/{}/stats", id)).await
    }

    /// `PATCH /ai-modules/:id/features`
    pub async fn update_features(&self, id: &str, features: Vec<FeatureToggle>) -> Result<AiModule> {
        let id = path_id("module", id)?;
        self.api
            .patch(
                &format!("/ai-modules/{}/features", id),
                &FeaturesUpdate { features },
            )
            .await
    }

    /// `GET /ai-modules/:id/logs`
    pub async fn logs(&self, id: &str) -> Result<Vec<AiModuleLog>> {
        let id = path_id("module", id)?;
        self.api.get(&format!("/ai-modules/{}/logs", id)).await
    }
}

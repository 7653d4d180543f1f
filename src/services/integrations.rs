//! Third-party integrations
//!
//! Responses are raw bodies; the `{data: {integration}}` envelope some
//! backend versions emit is not supported.

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::integration::{IntegrationUpdate, NewIntegration};
use crate::models::{Integration, IntegrationSyncResult, IntegrationTestResult};

use super::{path_id, require_text};

#[derive(Debug, Clone)]
pub struct IntegrationService {
    api: ApiClient,
}

impl IntegrationService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /integrations`
    pub async fn list(&self) -> Result<Vec<Integration>> {
        self.api.get("/integrations").await
    }

    /// `GET /integrations/:id`
    pub async fn get(&self, id: &str) -> Result<Integration> {
        let id = path_id("integration", id)?;
        self.api.get(&format!("/integrations/{}", id)).await
    }

    /// `POST /integrations`
    pub async fn create(&self, input: &NewIntegration) -> Result<Integration> {
        let mut input = input.clone();
        input.name = require_text("integration name", &input.name)?;
        self.api.post("/integrations", &input).await
    }

    /// `PATCH /integrations/:id`
    pub async fn update(&self, id: &str, update: &IntegrationUpdate) -> Result<Integration> {
        let id = path_id("integration", id)?;
        self.api
            .patch(&format!("/integrations/{}", id), update)
            .await
    }

    /// `DELETE /integrations/:id`
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = path_id("integration", id)?;
        self.api.delete(&format!("/integrations/{}", id)).await
    }

    /// `POST /integrations/:id/test`
    pub async fn test(&self, id: &str) -> Result<IntegrationTestResult> {
        let id = path_id("integration", id)?;
        self.api
            .post_empty_for(&format!("/integrations/{}/test", id))
            .await
    }

    /// `POST /integrations/:id/sync`
    pub async fn sync(&self, id: &str) -> Result<IntegrationSyncResult> {
        let id = path_id("integration", id)?;
        self.api
            .post_empty_for(&format!("/integrations/{}/sync", id))
            .await
    }
}

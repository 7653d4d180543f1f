//! Automation workflows

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::workflow::{NewWorkflow, WorkflowUpdate};
use crate::models::{Workflow, WorkflowExecution};

use super::{path_id, require_text};

#[derive(Debug, Clone)]
pub struct WorkflowService {
    api: ApiClient,
}

impl WorkflowService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /workflows`
    pub async fn list(&self) -> Result<Vec<Workflow>> {
        self.api.get("/workflows").await
    }

    /// `GET /workflows/:id`
    pub async fn get(&self, id: &str) -> Result<Workflow> {
        let id = path_id("workflow", id)?;
        self.api.get(&format!("/workflows/{}", id)).await
    }

    /// `POST /workflows`
    pub async fn create(&self, input: &NewWorkflow) -> Result<Workflow> {
        let mut input = input.clone();
        input.name = require_text("workflow name", &input.name)?;
        self.api.post("/workflows", &input).await
    }

    /// `PATCH /workflows/:id`
    pub async fn update(&self, id: &str, update: &WorkflowUpdate) -> Result<Workflow> {
        let id = path_id("workflow", id)?;
        self.api.patch(&format!("/workflows/{}", id), update).await
    }

    /// `DELETE /workflows/:id`
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = path_id("workflow", id)?;
        self.api.delete(&format!("/workflows/{}", id)).await
    }

    /// `POST /workflows/:id/execute`
    pub async fn execute(&self, id: &str) -> Result<WorkflowExecution> {
        let id = path_id("workflow", id)?;
        self.api
            .post_empty_for(&format!("/workflows/{}/execute", id))
            .await
    }
}

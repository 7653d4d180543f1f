//! Automation workflows

use crate::context::AppContext;
use crate::error::Result;
use crate::models::workflow::{NewWorkflow, WorkflowUpdate};
use crate::models::{Workflow, WorkflowExecution};
use crate::query::{Mutation, QueryState};

use super::{fetcher, keys};

#[derive(Debug, Clone)]
pub struct WorkflowsHook {
    ctx: AppContext,
}

impl WorkflowsHook {
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn list(&self) -> QueryState<Vec<Workflow>> {
        let service = self.ctx.services().workflows.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::workflow_list(),
                fetcher(service, |s| async move { s.list().await }),
            )
            .await
    }

    pub async fn get(&self, id: &str) -> QueryState<Workflow> {
        let service = self.ctx.services().workflows.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::workflow(id),
                fetcher((service, id.to_string()), |(s, id)| async move {
                    s.get(&id).await
                }),
            )
            .await
    }

    pub async fn create(&self, input: &NewWorkflow) -> Result<Workflow> {
        let service = &self.ctx.services().workflows;
        let workflow = Mutation::new("create_workflow")
            .invalidates(keys::workflows())
            .writes_to(|w: &Workflow| keys::workflow(&w.id))
            .success_toast("Workflow created")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.create(input)
            })
            .await?;
        self.ctx.stores().workflows.close_editor();
        Ok(workflow)
    }

    pub async fn update(&self, id: &str, update: &WorkflowUpdate) -> Result<Workflow> {
        let service = &self.ctx.services().workflows;
        Mutation::new("update_workflow")
            .invalidates(keys::workflows())
            .writes_to(|w: &Workflow| keys::workflow(&w.id))
            .success_toast("Workflow saved")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.update(id, update)
            })
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let service = &self.ctx.services().workflows;
        Mutation::new("delete_workflow")
            .removes(keys::workflow(id))
            .invalidates(keys::workflows())
            .success_toast("Workflow deleted")
            .run(self.ctx.query_client(), self.ctx.notifier(), || service.delete(id))
            .await?;

        let store = &self.ctx.stores().workflows;
        if store.snapshot().selected_workflow_id.as_deref() == Some(id) {
            store.select_workflow(None);
        }
        Ok(())
    }

    /// Trigger a run; run history lives on the workflow itself
    pub async fn execute(&self, id: &str) -> Result<WorkflowExecution> {
        let service = &self.ctx.services().workflows;
        Mutation::new("execute_workflow")
            .invalidates(keys::workflow(id))
            .success_toast("Workflow started")
            .run(self.ctx.query_client(), self.ctx.notifier(), || service.execute(id))
            .await
    }
}

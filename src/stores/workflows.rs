//! Workflow editor view state

use crate::models::WorkflowStatus;

use super::Store;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowsState {
    pub selected_workflow_id: Option<String>,
    pub status_filter: Option<WorkflowStatus>,
    pub is_editor_open: bool,
}

pub type WorkflowsStore = Store<WorkflowsState>;

impl Store<WorkflowsState> {
    pub fn select_workflow(&self, workflow_id: Option<String>) {
        self.update(|s| s.selected_workflow_id = workflow_id);
    }

    pub fn set_status_filter(&self, status: Option<WorkflowStatus>) {
        self.update(|s| s.status_filter = status);
    }

    /// Open the editor; `None` starts a new workflow
    pub fn open_editor(&self, workflow_id: Option<String>) {
        self.update(|s| {
            s.selected_workflow_id = workflow_id;
            s.is_editor_open = true;
        });
    }

    pub fn close_editor(&self) {
        self.update(|s| s.is_editor_open = false);
    }

    pub fn clear_filters(&self) {
        self.update(|s| s.status_filter = None);
    }
}

//! Integrations page view state

use crate::models::{IntegrationStatus, IntegrationType};

use super::Store;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrationsState {
    pub selected_integration_id: Option<String>,
    pub type_filter: Option<IntegrationType>,
    pub status_filter: Option<IntegrationStatus>,
    pub is_config_modal_open: bool,
}

pub type IntegrationsStore = Store<IntegrationsState>;

impl Store<IntegrationsState> {
    pub fn select_integration(&self, integration_id: Option<String>) {
        self.update(|s| s.selected_integration_id = integration_id);
    }

    pub fn set_type_filter(&self, integration_type: Option<IntegrationType>) {
        self.update(|s| s.type_filter = integration_type);
    }

    pub fn set_status_filter(&self, status: Option<IntegrationStatus>) {
        self.update(|s| s.status_filter = status);
    }

    /// Open the configuration modal for one integration
    pub fn open_config(&self, integration_id: impl Into<String>) {
        let id = integration_id.into();
        self.update(|s| {
            s.selected_integration_id = Some(id);
            s.is_config_modal_open = true;
        });
    }

    pub fn close_config(&self) {
        self.update(|s| s.is_config_modal_open = false);
    }

    pub fn clear_filters(&self) {
        self.update(|s| {
            s.type_filter = None;
            s.status_filter = None;
        });
    }
}

//! Third-party integrations

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationType {
    Slack,
    GoogleDrive,
    Dropbox,
    Github,
    Notion,
    Webhook,
    #[serde(other)]
    Other,
}

/// Connection state, driven by remote test and sync calls
///
/// `inactive -> active -> error`; the client never moves it on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationStatus {
    Inactive,
    Active,
    Error,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub integration_type: IntegrationType,
    pub status: IntegrationStatus,
    #[serde(default)]
    pub config: HashMap<String, Value>,
    #[serde(default)]
    pub last_sync_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIntegration {
    pub name: String,
    #[serde(rename = "type")]
    pub integration_type: IntegrationType,
    pub config: HashMap<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IntegrationStatus>,
}

/// Result of `POST /integrations/:id/test`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrationTestResult {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of `POST /integrations/:id/sync`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationSyncResult {
    pub success: bool,
    #[serde(default)]
    pub items_synced: u64,
    #[serde(default)]
    pub synced_at: Option<DateTime<Utc>>,
}

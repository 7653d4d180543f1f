//! Activity log entries

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Document,
    Chat,
    Team,
    Integration,
    Workflow,
    Billing,
    Auth,
    #[serde(other)]
    Other,
}

impl ActivityType {
    /// Wire name, as used in the `type` query parameter
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Document => "document",
            ActivityType::Chat => "chat",
            ActivityType::Team => "team",
            ActivityType::Integration => "integration",
            ActivityType::Workflow => "workflow",
            ActivityType::Billing => "billing",
            ActivityType::Auth => "auth",
            ActivityType::Other => "other",
        }
    }
}

impl std::str::FromStr for ActivityType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "document" => Ok(ActivityType::Document),
            "chat" => Ok(ActivityType::Chat),
            "team" => Ok(ActivityType::Team),
            "integration" => Ok(ActivityType::Integration),
            "workflow" => Ok(ActivityType::Workflow),
            "billing" => Ok(ActivityType::Billing),
            "auth" => Ok(ActivityType::Auth),
            other => Err(format!("unknown activity type '{}'", other)),
        }
    }
}

/// One entry in the append-only activity log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub action: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// `{activities, total}` envelope of `GET /activities`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityPage {
    #[serde(default)]
    pub activities: Vec<ActivityLog>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityQuery {
    pub activity_type: Option<ActivityType>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ActivityQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(t) = self.activity_type {
            params.push(("type", t.as_str().to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }

    pub fn key_parts(&self) -> Vec<String> {
        self.to_params()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub today: u64,
    #[serde(default)]
    pub this_week: u64,
    #[serde(default)]
    pub by_type: HashMap<String, u64>,
}

/// Body for appending an activity entry
#[derive(Debug, Clone, Serialize)]
pub struct NewActivity {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub action: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, Value>,
}

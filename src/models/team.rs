//! Team members and workspace settings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a member inside the team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Owner,
    Admin,
    Member,
    Viewer,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for TeamRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TeamRole::Owner => "owner",
            TeamRole::Admin => "admin",
            TeamRole::Member => "member",
            TeamRole::Viewer => "viewer",
            TeamRole::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for TeamRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owner" => Ok(TeamRole::Owner),
            "admin" => Ok(TeamRole::Admin),
            "member" => Ok(TeamRole::Member),
            "viewer" => Ok(TeamRole::Viewer),
            other => Err(format!("unknown team role '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: TeamRole,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
}

/// Workspace-wide settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSettings {
    pub name: String,
    #[serde(default)]
    pub allow_invites: bool,
    #[serde(default)]
    pub default_role: Option<TeamRole>,
    #[serde(default)]
    pub max_members: Option<u32>,
}

/// Partial settings update
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_invites: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_role: Option<TeamRole>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InviteRequest {
    pub email: String,
    pub role: TeamRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub id: String,
    pub email: String,
    pub role: TeamRole,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleUpdate {
    pub role: TeamRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_str() {
        for role in [TeamRole::Owner, TeamRole::Admin, TeamRole::Member, TeamRole::Viewer] {
            assert_eq!(role.to_string().parse::<TeamRole>().unwrap(), role);
        }
        assert!("wizard".parse::<TeamRole>().is_err());
    }

    #[test]
    fn test_unknown_role_decodes() {
        let member: TeamMember = serde_json::from_str(
            r#"{"id":"m1","name":"Ana","email":"ana@example.com","role":"guest"}"#,
        )
        .unwrap();
        assert_eq!(member.role, TeamRole::Unknown);
    }
}

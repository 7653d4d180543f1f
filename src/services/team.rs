//! Team membership and workspace settings

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::team::{InviteRequest, Invitation, RoleUpdate, TeamSettingsUpdate};
use crate::models::{TeamMember, TeamRole, TeamSettings};

use super::{path_id, require_email};

#[derive(Debug, Clone)]
pub struct TeamService {
    api: ApiClient,
}

impl TeamService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /team/members`
    pub async fn members(&self) -> Result<Vec<TeamMember>> {
        self.api.get("/team/members").await
    }

    /// `POST /team/invitations`
    pub async fn invite(&self, email: &str, role: TeamRole) -> Result<Invitation> {
        let body = InviteRequest {
            email: require_email(email)?,
            role,
        };
        self.api.post("/team/invitations", &body).await
    }

    /// `PATCH /team/members/:id`
    pub async fn update_member_role(&self, id: &str, role: TeamRole) -> Result<TeamMember> {
        let id = path_id("member", id)?;
        self.api
            .patch(&format!("/team/members/{}", id), &RoleUpdate { role })
            .await
    }

    /// `DELETE /team/members/:id`
    pub async fn remove_member(&self, id: &str) -> Result<()> {
        let id = path_id("member", id)?;
        self.api.delete(&format!("/team/members/{}", id)).await
    }

    /// `GET /team/settings`
    pub async fn settings(&self) -> Result<TeamSettings> {
        self.api.get("/team/settings").await
    }

    /// `PATCH /team/settings`
    pub async fn update_settings(&self, update: &TeamSettingsUpdate) -> Result<TeamSettings> {
        self.api.patch("/team/settings", update).await
    }
}

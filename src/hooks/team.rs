//! Team members, invitations and settings

use crate::context::AppContext;
use crate::error::Result;
use crate::models::team::{Invitation, TeamSettingsUpdate};
use crate::models::{TeamMember, TeamRole, TeamSettings};
use crate::query::{Mutation, QueryState};

use super::{fetcher, keys};

#[derive(Debug, Clone)]
pub struct TeamHook {
    ctx: AppContext,
}

impl TeamHook {
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn members(&self) -> QueryState<Vec<TeamMember>> {
        let service = self.ctx.services().team.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::team_members(),
                fetcher(service, |s| async move { s.members().await }),
            )
            .await
    }

    pub async fn settings(&self) -> QueryState<TeamSettings> {
        let service = self.ctx.services().team.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::team_settings(),
                fetcher(service, |s| async move { s.settings().await }),
            )
            .await
    }

    /// Invite someone and close the invite modal
    pub async fn invite(&self, email: &str, role: TeamRole) -> Result<Invitation> {
        let service = &self.ctx.services().team;
        let invitation = Mutation::new("invite_member")
            .invalidates(keys::dashboard())
            .invalidates(keys::team_members())
            .success_toast(format!("Invitation sent to {}", email.trim()))
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.invite(email, role)
            })
            .await?;
        self.ctx.stores().team.set_invite_modal_open(false);
        Ok(invitation)
    }

    pub async fn update_member_role(&self, id: &str, role: TeamRole) -> Result<TeamMember> {
        let service = &self.ctx.services().team;
        Mutation::new("update_member_role")
            .invalidates(keys::team_members())
            .success_toast("Role updated")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.update_member_role(id, role)
            })
            .await
    }

    /// Remove a member and drop them from the selection
    pub async fn remove_member(&self, id: &str) -> Result<()> {
        let service = &self.ctx.services().team;
        Mutation::new("remove_member")
            .invalidates(keys::dashboard())
            .invalidates(keys::team_members())
            .success_toast("Member removed")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.remove_member(id)
            })
            .await?;

        let store = &self.ctx.stores().team;
        if store
            .snapshot()
            .selected_member_ids
            .iter()
            .any(|selected| selected == id)
        {
            store.toggle_member_selection(id);
        }
        Ok(())
    }

    pub async fn update_settings(&self, update: &TeamSettingsUpdate) -> Result<TeamSettings> {
        let service = &self.ctx.services().team;
        Mutation::new("update_team_settings")
            .invalidates(keys::team_settings())
            .writes_to(|_: &TeamSettings| keys::team_settings())
            .success_toast("Team settings saved")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.update_settings(update)
            })
            .await
    }
}

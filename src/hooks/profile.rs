//! Current user's profile

use crate::context::AppContext;
use crate::error::Result;
use crate::models::{ProfileUpdate, User};
use crate::query::{Mutation, QueryState};

use super::{fetcher, keys};

#[derive(Debug, Clone)]
pub struct ProfileHook {
    ctx: AppContext,
}

impl ProfileHook {
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn profile(&self) -> QueryState<User> {
        let service = self.ctx.services().profile.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::profile(),
                fetcher(service, |s| async move { s.get_profile().await }),
            )
            .await
    }

    pub async fn refetch(&self) -> QueryState<User> {
        let service = self.ctx.services().profile.clone();
        self.ctx
            .query_client()
            .refetch(
                keys::profile(),
                fetcher(service, |s| async move { s.get_profile().await }),
            )
            .await
    }

    /// Update the profile and overwrite the cached copy with the result
    pub async fn update(&self, update: &ProfileUpdate) -> Result<User> {
        let service = &self.ctx.services().profile;
        let user = Mutation::new("update_profile")
            .invalidates(keys::auth_me())
            .writes_to(|_: &User| keys::profile())
            .success_toast("Profile updated")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.update_profile(update)
            })
            .await?;
        self.ctx.stores().auth.set_user(user.clone());
        Ok(user)
    }
}

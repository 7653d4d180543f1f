//! Sign-in, registration and sign-out
//!
//! Drives the [`AuthStore`](crate::stores::AuthStore) state machine around
//! the auth service. Attempts are never retried automatically.

use crate::context::AppContext;
use crate::credentials::StoredSession;
use crate::error::{CollabError, ErrorKind, Result};
use crate::models::{AuthResponse, User};
use crate::query::QueryState;
use crate::stores::AuthState;

use super::{fetcher, keys};

#[derive(Debug, Clone)]
pub struct AuthHook {
    ctx: AppContext,
}

impl AuthHook {
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub fn state(&self) -> AuthState {
        self.ctx.stores().auth.snapshot()
    }

    pub fn is_authenticated(&self) -> bool {
        self.ctx.stores().auth.is_authenticated()
    }

    /// `GET /auth/me` through the cache
    pub async fn current_user(&self) -> QueryState<User> {
        let service = self.ctx.services().auth.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::auth_me(),
                fetcher(service, |s| async move { s.me().await }),
            )
            .await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        self.ctx.stores().auth.begin_authenticating()?;
        tracing::info!(email = %email.trim(), "Signing in");
        let result = self.ctx.services().auth.login(email, password).await;
        self.finish(result).await
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User> {
        self.ctx.stores().auth.begin_authenticating()?;
        tracing::info!(email = %email.trim(), "Registering account");
        let result = self
            .ctx
            .services()
            .auth
            .register(name, email, password)
            .await;
        self.finish(result).await
    }

    async fn finish(&self, result: Result<AuthResponse>) -> Result<User> {
        match result {
            Ok(AuthResponse { user, token }) => {
                self.ctx.api().set_session_token(Some(token.clone())).await;
                self.persist(&token);
                self.seed_user(&user).await;
                self.ctx
                    .stores()
                    .auth
                    .authenticated(user.clone(), Some(token));
                tracing::info!(user_id = %user.id, "Signed in");
                Ok(user)
            }
            Err(error) => {
                tracing::warn!("Authentication failed: {}", error);
                self.ctx.stores().auth.failed(error.user_message());
                self.ctx.notifier().report(&error);
                Err(error)
            }
        }
    }

    /// Sign out locally even when the backend call fails
    pub async fn logout(&self) {
        if let Err(e) = self.ctx.services().auth.logout().await {
            tracing::warn!("Backend logout failed: {}", e);
        }
        self.ctx.api().set_session_token(None).await;
        if let Some(store) = self.ctx.session_store() {
            if let Err(e) = store.clear() {
                tracing::warn!("Could not remove saved session: {}", e);
            }
        }
        self.ctx.query_client().clear().await;
        self.ctx.stores().reset_all();
        tracing::info!("Signed out");
    }

    /// Resume a saved session, validating it with `GET /auth/me`
    ///
    /// Returns `Ok(None)` when nothing is saved or the backend rejects the
    /// token; a rejected token is removed from the store.
    pub async fn restore_session(&self) -> Result<Option<User>> {
        let Some(store) = self.ctx.session_store() else {
            return Ok(None);
        };
        let Some(session) = store.load()? else {
            return Ok(None);
        };
        if session.backend_url != self.ctx.api().base_url() {
            tracing::warn!(
                saved = %session.backend_url,
                current = %self.ctx.api().base_url(),
                "Saved session belongs to another backend; ignoring it"
            );
            return Ok(None);
        }

        self.ctx.stores().auth.begin_authenticating()?;
        self.ctx
            .api()
            .set_session_token(Some(session.token.clone()))
            .await;

        match self.ctx.services().auth.me().await {
            Ok(user) => {
                self.seed_user(&user).await;
                self.ctx
                    .stores()
                    .auth
                    .authenticated(user.clone(), Some(session.token));
                tracing::debug!(user_id = %user.id, "Session restored");
                Ok(Some(user))
            }
            Err(error) if error.kind() == ErrorKind::Unauthorized => {
                tracing::info!("Saved session is no longer valid");
                self.ctx.api().set_session_token(None).await;
                if let Err(e) = store.clear() {
                    tracing::warn!("Could not remove saved session: {}", e);
                }
                self.ctx.stores().auth.signed_out();
                Ok(None)
            }
            Err(error) => {
                self.ctx.api().set_session_token(None).await;
                self.ctx.stores().auth.failed(error.user_message());
                Err(error)
            }
        }
    }

    /// Token for the signed-in user
    pub fn token(&self) -> Result<String> {
        self.state()
            .token
            .ok_or_else(|| CollabError::Unauthorized("not signed in".to_string()))
    }

    fn persist(&self, token: &str) {
        if let Some(store) = self.ctx.session_store() {
            let session = StoredSession::new(token, self.ctx.api().base_url());
            if let Err(e) = store.save(&session) {
                tracing::warn!("Could not save session: {}", e);
            }
        }
    }

    async fn seed_user(&self, user: &User) {
        let query = self.ctx.query_client();
        for key in [keys::auth_me(), keys::profile()] {
            if let Err(e) = query.set_query_data(&key, user).await {
                tracing::warn!(%key, "Could not cache user: {}", e);
            }
        }
    }
}

//! Application context
//!
//! [`AppContext`] is built once at startup and handed to every hook. It owns
//! the HTTP transport, the query cache, the toast surface and one instance of
//! every UI-state store. Clones are cheap and share all of them. Call
//! [`AppContext::shutdown`] before the process exits.

use std::sync::Arc;

use crate::config::Config;
use crate::credentials::SessionStore;
use crate::error::Result;
use crate::hooks::{
    ActivityHook, AiModulesHook, AuthHook, ChatHook, ChatView, DashboardHook, DocumentsHook,
    DocumentsView, FoldersHook, IntegrationsHook, NotificationsHook, NotificationsView,
    PaymentHook, ProfileHook, TeamHook, TeamView, WorkflowsHook,
};
use crate::http::ApiClient;
use crate::notify::Notifier;
use crate::query::QueryClient;
use crate::services::{
    ActivityService, AiModuleService, AuthService, ChatService, DocumentService, FolderService,
    IntegrationService, NotificationService, PaymentService, ProfileService, TeamService,
    WorkflowService,
};
use crate::stores::Stores;

/// One handle per resource service, all sharing the context's transport
#[derive(Debug, Clone)]
pub struct Services {
    pub auth: AuthService,
    pub profile: ProfileService,
    pub documents: DocumentService,
    pub folders: FolderService,
    pub chat: ChatService,
    pub team: TeamService,
    pub payment: PaymentService,
    pub integrations: IntegrationService,
    pub notifications: NotificationService,
    pub activity: ActivityService,
    pub workflows: WorkflowService,
    pub ai_modules: AiModuleService,
}

impl Services {
    fn new(api: &ApiClient) -> Self {
        Self {
            auth: AuthService::new(api.clone()),
            profile: ProfileService::new(api.clone()),
            documents: DocumentService::new(api.clone()),
            folders: FolderService::new(api.clone()),
            chat: ChatService::new(api.clone()),
            team: TeamService::new(api.clone()),
            payment: PaymentService::new(api.clone()),
            integrations: IntegrationService::new(api.clone()),
            notifications: NotificationService::new(api.clone()),
            activity: ActivityService::new(api.clone()),
            workflows: WorkflowService::new(api.clone()),
            ai_modules: AiModuleService::new(api.clone()),
        }
    }
}

/// Explicitly constructed replacement for process-wide singletons
///
/// # Examples
///
/// ```
/// use collabdesk::{AppContext, Config};
///
/// # #[tokio::main]
/// # async fn main() -> collabdesk::Result<()> {
/// let ctx = AppContext::new(Config::default())?;
/// assert!(ctx.config().backend.is_placeholder());
/// assert!(!ctx.auth().state().is_authenticated());
/// ctx.shutdown().await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AppContext {
    config: Arc<Config>,
    api: ApiClient,
    query: QueryClient,
    notifier: Notifier,
    stores: Stores,
    services: Services,
    sessions: Option<Arc<dyn SessionStore>>,
}

impl AppContext {
    /// Validate `config` and build every shared component
    ///
    /// No network I/O happens here.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        if config.backend.is_placeholder() {
            tracing::warn!("Backend is not configured; requests will fail until it is");
        }

        let api = ApiClient::new(&config.backend)?;
        let query = QueryClient::new(&config.query);
        let services = Services::new(&api);

        tracing::debug!(backend = %api.base_url(), "Application context created");

        Ok(Self {
            config: Arc::new(config),
            api,
            query,
            notifier: Notifier::new(),
            stores: Stores::new(),
            services,
            sessions: None,
        })
    }

    /// Persist session tokens in `store`
    pub fn with_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.sessions = Some(store);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn query_client(&self) -> &QueryClient {
        &self.query
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn session_store(&self) -> Option<&Arc<dyn SessionStore>> {
        self.sessions.as_ref()
    }

    pub fn auth(&self) -> AuthHook {
        AuthHook::new(self)
    }

    pub fn profile(&self) -> ProfileHook {
        ProfileHook::new(self)
    }

    pub fn documents(&self) -> DocumentsHook {
        DocumentsHook::new(self)
    }

    pub fn folders(&self) -> FoldersHook {
        FoldersHook::new(self)
    }

    pub fn chat(&self) -> ChatHook {
        ChatHook::new(self)
    }

    pub fn team(&self) -> TeamHook {
        TeamHook::new(self)
    }

    pub fn payment(&self) -> PaymentHook {
        PaymentHook::new(self)
    }

    pub fn integrations(&self) -> IntegrationsHook {
        IntegrationsHook::new(self)
    }

    pub fn notifications(&self) -> NotificationsHook {
        NotificationsHook::new(self)
    }

    pub fn activity(&self) -> ActivityHook {
        ActivityHook::new(self)
    }

    pub fn workflows(&self) -> WorkflowsHook {
        WorkflowsHook::new(self)
    }

    pub fn ai_modules(&self) -> AiModulesHook {
        AiModulesHook::new(self)
    }

    pub fn dashboard(&self) -> DashboardHook {
        DashboardHook::new(self)
    }

    pub async fn documents_view(&self) -> DocumentsView {
        DocumentsView::load(self).await
    }

    pub async fn team_view(&self) -> TeamView {
        TeamView::load(self).await
    }

    pub async fn chat_view(&self) -> ChatView {
        ChatView::load(self).await
    }

    pub async fn notifications_view(&self) -> NotificationsView {
        NotificationsView::load(self).await
    }

    /// Drop cached queries and the in-memory session
    ///
    /// The persisted session (if any) is kept so the next process can resume.
    pub async fn shutdown(&self) {
        self.query.clear().await;
        self.api.set_session_token(None).await;
        tracing::debug!("Application context shut down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BackendConfig;

    #[tokio::test]
    async fn test_context_with_default_config_uses_placeholders() {
        let ctx = AppContext::new(Config::default()).unwrap();
        assert_eq!(ctx.api().base_url(), crate::config::PLACEHOLDER_BACKEND_URL);
        assert!(ctx.session_store().is_none());
    }

    #[test]
    fn test_context_rejects_invalid_config() {
        let config = Config {
            backend: BackendConfig {
                url: Some("ftp://files.example.com".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(AppContext::new(config).is_err());
    }

    #[tokio::test]
    async fn test_clones_share_stores_and_cache() {
        let ctx = AppContext::new(Config::default()).unwrap();
        let other = ctx.clone();
        other.stores().documents.set_search_query("q3");
        assert_eq!(ctx.stores().documents.snapshot().search_query, "q3");

        let key = crate::query::QueryKey::new(["profile"]);
        other.query_client().set_query_data(&key, &1u8).await.unwrap();
        assert_eq!(ctx.query_client().get_query_data::<u8>(&key).await, Some(1));

        ctx.shutdown().await;
        assert!(other.query_client().get_raw(&key).await.is_none());
    }
}

//! Data-query hooks and composed views
//!
//! A hook binds one resource service to the query cache: every read goes
//! through [`QueryClient::fetch_query`](crate::query::QueryClient::fetch_query)
//! under a key from [`keys`], every write through a
//! [`Mutation`](crate::query::Mutation) that invalidates the resource's
//! prefix. Hooks hold a clone of the [`AppContext`](crate::AppContext) and
//! are cheap to create on demand.
//!
//! Composed views ([`DocumentsView`], [`TeamView`], [`ChatView`],
//! [`NotificationsView`]) merge query results with a UI-state snapshot and
//! add no state of their own.

use std::future::Future;

use crate::error::Result;

pub mod activity;
pub mod ai_modules;
pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod documents;
pub mod folders;
pub mod integrations;
pub mod keys;
pub mod notifications;
pub mod payment;
pub mod profile;
pub mod team;
pub mod views;
pub mod workflows;

pub use activity::ActivityHook;
pub use ai_modules::AiModulesHook;
pub use auth::AuthHook;
pub use chat::ChatHook;
pub use dashboard::{load_dashboard_stats, DashboardHook, DashboardStats};
pub use documents::DocumentsHook;
pub use folders::FoldersHook;
pub use integrations::IntegrationsHook;
pub use notifications::NotificationsHook;
pub use payment::PaymentHook;
pub use profile::ProfileHook;
pub use team::TeamHook;
pub use views::{ChatView, DocumentsView, NotificationsView, TeamView};
pub use workflows::WorkflowsHook;

/// Turn a service call into a repeatable, `'static` cache fetcher
///
/// `input` (usually a service handle, or a tuple of one and its arguments)
/// is cloned for every attempt.
pub(crate) fn fetcher<I, T, F, Fut>(input: I, call: F) -> impl Fn() -> Fut + Send + Sync + 'static
where
    I: Clone + Send + Sync + 'static,
    F: Fn(I) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    move || call(input.clone())
}

//! CollabDesk - client application layer library
//!
//! This library is the application layer between a view (the bundled CLI, or
//! any other front end) and the CollabDesk backend: typed resource services,
//! a shared query cache, UI-state stores and the hooks that bind them.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `services`: one async method per backend REST operation
//! - `query`: cache keyed by string tuples, staleness, retries and mutations
//! - `stores`: observable, never-persisted view state with synchronous setters
//! - `hooks`: per-resource queries/mutations and composed views
//! - `context`: the explicitly constructed [`AppContext`] that owns all of the above
//! - `config`: configuration management and validation
//! - `error`: error types, error kinds and result alias
//! - `cli` / `commands`: the command-line front end
//!
//! # Example
//!
//! ```no_run
//! use collabdesk::{AppContext, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/config.yaml", &Default::default())?;
//!     let ctx = AppContext::new(config)?;
//!
//!     ctx.auth().login("ana@example.com", "correct horse").await?;
//!     let stats = ctx.dashboard().stats().await.into_result()?;
//!     println!("{} documents", stats.total_documents);
//!
//!     ctx.shutdown().await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod credentials;
pub mod error;
pub mod hooks;
pub mod http;
pub mod models;
pub mod notify;
pub mod query;
pub mod services;
pub mod stores;

// Re-export commonly used types
pub use config::Config;
pub use context::AppContext;
pub use error::{CollabError, ErrorKind, Result};
pub use notify::{Notifier, Toast, ToastLevel};
pub use query::{QueryClient, QueryKey, QueryState};

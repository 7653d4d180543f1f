//! Command handlers for the CLI
//!
//! Each handler takes the application context and one parsed subcommand,
//! reads through the hooks and prints a table (or JSON with `--json`).

pub mod activity;
pub mod auth;
pub mod billing;
pub mod chat;
pub mod dashboard;
pub mod documents;
pub mod integrations;
pub mod modules;
pub mod notifications;
pub mod output;
pub mod team;
pub mod workflows;

use crate::cli::Commands;
use crate::context::AppContext;
use crate::error::Result;

/// Dispatch a parsed command
pub async fn execute(ctx: &AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Auth { command } => auth::handle_auth(ctx, command).await,
        Commands::Documents { command } => documents::handle_documents(ctx, command).await,
        Commands::Folders { command } => documents::handle_folders(ctx, command).await,
        Commands::Chat { command } => chat::handle_chat(ctx, command).await,
        Commands::Team { command } => team::handle_team(ctx, command).await,
        Commands::Notifications { command } => {
            notifications::handle_notifications(ctx, command).await
        }
        Commands::Activity { command } => activity::handle_activity(ctx, command).await,
        Commands::Billing { command } => billing::handle_billing(ctx, command).await,
        Commands::Integrations { command } => {
            integrations::handle_integrations(ctx, command).await
        }
        Commands::Workflows { command } => workflows::handle_workflows(ctx, command).await,
        Commands::Modules { command } => modules::handle_modules(ctx, command).await,
        Commands::Dashboard { json } => dashboard::handle_dashboard(ctx, json).await,
    }
}

/// Whether `command` should start from a restored session
pub fn needs_session(command: &Commands) -> bool {
    !matches!(
        command,
        Commands::Auth {
            command: crate::cli::AuthCommand::Login { .. } | crate::cli::AuthCommand::Register { .. }
        }
    )
}

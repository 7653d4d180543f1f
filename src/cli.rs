//! Command-line interface definition for CollabDesk
//!
//! This module defines the CLI structure using clap's derive API. Every
//! command goes through the same hooks a view layer would use.

use clap::{Parser, Subcommand};

use crate::models::{ActivityType, TeamRole};

/// CollabDesk - workspace client
///
/// Browse documents, chat sessions, team members, billing and more from the
/// terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "collabdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    /// Do not read or write the saved session in the OS keyring
    #[arg(long)]
    pub no_keyring: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for CollabDesk
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Sign in, register, sign out
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Browse and manage documents
    Documents {
        #[command(subcommand)]
        command: DocumentCommand,
    },

    /// Browse folders
    Folders {
        #[command(subcommand)]
        command: FolderCommand,
    },

    /// Chat sessions and agents
    Chat {
        #[command(subcommand)]
        command: ChatCommand,
    },

    /// Team members and invitations
    Team {
        #[command(subcommand)]
        command: TeamCommand,
    },

    /// In-app notifications
    Notifications {
        #[command(subcommand)]
        command: NotificationCommand,
    },

    /// Activity feed
    Activity {
        #[command(subcommand)]
        command: ActivityCommand,
    },

    /// Plans, subscription and usage
    Billing {
        #[command(subcommand)]
        command: BillingCommand,
    },

    /// Third-party integrations
    Integrations {
        #[command(subcommand)]
        command: IntegrationCommand,
    },

    /// Automation workflows
    Workflows {
        #[command(subcommand)]
        command: WorkflowCommand,
    },

    /// AI modules
    Modules {
        #[command(subcommand)]
        command: ModuleCommand,
    },

    /// Workspace summary
    Dashboard {
        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum AuthCommand {
    /// Sign in and save the session
    Login {
        #[arg(short, long)]
        email: String,

        /// Password (or set COLLABDESK_PASSWORD)
        #[arg(short, long, env = "COLLABDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        /// Password, at least 8 characters (or set COLLABDESK_PASSWORD)
        #[arg(short, long, env = "COLLABDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign out and forget the saved session
    Logout,

    /// Show the signed-in user
    Whoami,
}

#[derive(Subcommand, Debug, Clone)]
pub enum DocumentCommand {
    /// List documents
    List {
        /// Search text
        #[arg(short, long)]
        search: Option<String>,

        /// Only documents in this folder
        #[arg(short, long)]
        folder: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Print raw JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one document
    Show {
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Create a document record
    Create {
        name: String,

        /// Containing folder
        #[arg(short, long)]
        folder: Option<String>,

        /// Tags (repeatable)
        #[arg(short, long)]
        tag: Vec<String>,
    },

    /// Delete a document
    Delete { id: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum FolderCommand {
    /// List folders
    List {
        #[arg(long)]
        json: bool,
    },

    /// List documents in a folder
    Documents {
        id: String,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ChatCommand {
    /// List chat sessions
    Sessions {
        #[arg(long)]
        json: bool,
    },

    /// Show the messages of a session
    Messages {
        session_id: String,

        #[arg(long)]
        json: bool,
    },

    /// Send a message to a session
    Send { session_id: String, message: String },

    /// List available agents
    Agents {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum TeamCommand {
    /// List team members
    Members {
        /// Only members with this role
        #[arg(short, long)]
        role: Option<TeamRole>,

        /// Match name or email
        #[arg(short, long)]
        search: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Invite someone to the team
    Invite {
        email: String,

        #[arg(short, long, default_value = "member")]
        role: TeamRole,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum NotificationCommand {
    /// List notifications
    List {
        /// Only unread notifications
        #[arg(short, long)]
        unread: bool,

        #[arg(long)]
        json: bool,
    },

    /// Print the unread count
    Unread,

    /// Mark every notification as read
    ReadAll,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ActivityCommand {
    /// List recent activity
    List {
        /// Only this activity type
        #[arg(short = 't', long = "type")]
        activity_type: Option<ActivityType>,

        #[arg(long, default_value_t = 1)]
        page: u32,

        #[arg(long)]
        json: bool,
    },

    /// Activity totals
    Stats {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum BillingCommand {
    /// List available plans
    Plans {
        #[arg(long)]
        json: bool,
    },

    /// Show the current subscription
    Subscription {
        #[arg(long)]
        json: bool,
    },

    /// Show usage against plan limits
    Usage {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum IntegrationCommand {
    /// List integrations
    List {
        #[arg(long)]
        json: bool,
    },

    /// Test an integration's connection
    Test { id: String },

    /// Start a sync
    Sync { id: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum WorkflowCommand {
    /// List workflows
    List {
        #[arg(long)]
        json: bool,
    },

    /// Run a workflow
    Execute { id: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ModuleCommand {
    /// List AI modules
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show usage statistics of a module
    Stats {
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Show recent log entries of a module
    Logs {
        id: String,

        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            json_logs: false,
            no_keyring: false,
            command: Commands::Dashboard { json: false },
        }
    }
}

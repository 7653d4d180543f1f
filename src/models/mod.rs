//! Wire types for every backend resource
//!
//! All entities are owned by the backend; the client only holds cached
//! copies. Field names follow the backend's camelCase JSON. Enum values the
//! client does not recognise decode to a catch-all variant instead of failing
//! the whole response.

pub mod activity;
pub mod ai_module;
pub mod chat;
pub mod document;
pub mod integration;
pub mod notification;
pub mod payment;
pub mod team;
pub mod user;
pub mod workflow;

pub use activity::{ActivityLog, ActivityPage, ActivityQuery, ActivityStats, ActivityType};
pub use ai_module::{AiModule, AiModuleLog, AiModuleStats, AiModuleStatus, AiModuleTestResult};
pub use chat::{ChatAgent, ChatMessage, ChatSession, MessageRole};
pub use document::{Document, DocumentQuery, Folder};
pub use integration::{
    Integration, IntegrationStatus, IntegrationSyncResult, IntegrationTestResult, IntegrationType,
};
pub use notification::{Notification, NotificationSettings, NotificationType};
pub use payment::{Plan, Subscription, SubscriptionStatus, Usage};
pub use team::{TeamMember, TeamRole, TeamSettings};
pub use user::{AuthResponse, ProfileUpdate, User};
pub use workflow::{Workflow, WorkflowExecution, WorkflowStatus};

//! Cache keys for every resource
//!
//! The first segment names the resource, so invalidating the one-segment
//! prefix covers every list, detail and sub-resource query of it.

use crate::models::{ActivityQuery, DocumentQuery};
use crate::query::QueryKey;

pub fn auth_me() -> QueryKey {
    QueryKey::new(["auth", "me"])
}

pub fn profile() -> QueryKey {
    QueryKey::new(["profile"])
}

pub fn documents() -> QueryKey {
    QueryKey::new(["documents"])
}

pub fn document_list(query: &DocumentQuery) -> QueryKey {
    documents().with("list").extend(query.key_parts())
}

pub fn document(id: &str) -> QueryKey {
    documents().with("detail").with(id)
}

pub fn folders() -> QueryKey {
    QueryKey::new(["folders"])
}

pub fn folder_list() -> QueryKey {
    folders().with("list")
}

pub fn folder(id: &str) -> QueryKey {
    folders().with("detail").with(id)
}

pub fn folder_documents(id: &str) -> QueryKey {
    folders().with("documents").with(id)
}

pub fn chat() -> QueryKey {
    QueryKey::new(["chat"])
}

pub fn chat_sessions() -> QueryKey {
    chat().with("sessions")
}

pub fn chat_session(id: &str) -> QueryKey {
    chat().with("session").with(id)
}

pub fn chat_messages(session_id: &str) -> QueryKey {
    chat().with("messages").with(session_id)
}

pub fn chat_agents() -> QueryKey {
    chat().with("agents")
}

pub fn team() -> QueryKey {
    QueryKey::new(["team"])
}

pub fn team_members() -> QueryKey {
    team().with("members")
}

pub fn team_settings() -> QueryKey {
    team().with("settings")
}

pub fn payment() -> QueryKey {
    QueryKey::new(["payment"])
}

pub fn plans() -> QueryKey {
    payment().with("plans")
}

pub fn subscription() -> QueryKey {
    payment().with("subscription")
}

pub fn usage() -> QueryKey {
    payment().with("usage")
}

pub fn integrations() -> QueryKey {
    QueryKey::new(["integrations"])
}

pub fn integration_list() -> QueryKey {
    integrations().with("list")
}

pub fn integration(id: &str) -> QueryKey {
    integrations().with("detail").with(id)
}

pub fn notifications() -> QueryKey {
    QueryKey::new(["notifications"])
}

pub fn notification_list(unread_only: bool) -> QueryKey {
    let filter = if unread_only { "unread" } else { "all" };
    notifications().with("list").with(filter)
}

pub fn unread_count() -> QueryKey {
    notifications().with("unread-count")
}

pub fn notification_settings() -> QueryKey {
    notifications().with("settings")
}

pub fn activity() -> QueryKey {
    QueryKey::new(["activity"])
}

pub fn activity_list(query: &ActivityQuery) -> QueryKey {
    activity().with("list").extend(query.key_parts())
}

pub fn activity_stats() -> QueryKey {
    activity().with("stats")
}

pub fn workflows() -> QueryKey {
    QueryKey::new(["workflows"])
}

pub fn workflow_list() -> QueryKey {
    workflows().with("list")
}

pub fn workflow(id: &str) -> QueryKey {
    workflows().with("detail").with(id)
}

pub fn ai_modules() -> QueryKey {
    QueryKey::new(["ai-modules"])
}

pub fn ai_module_list() -> QueryKey {
    ai_modules().with("list")
}

pub fn ai_module(id: &str) -> QueryKey {
    ai_modules().with("detail").with(id)
}

pub fn ai_module_stats(id: &str) -> QueryKey {
    ai_modules().with("stats").with(id)
}

pub fn ai_module_logs(id: &str) -> QueryKey {
    ai_modules().with("logs").with(id)
}

pub fn dashboard() -> QueryKey {
    QueryKey::new(["dashboard"])
}

pub fn dashboard_stats() -> QueryKey {
    dashboard().with("stats")
}

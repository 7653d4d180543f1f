//! Chat sessions, messages and agents
//!
//! Every chat endpoint wraps its payload in a named envelope
//! (`{sessions}`, `{session}`, `{messages}`, `{message}`, `{agents}`).

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::chat::{ChatSessionUpdate, NewChatMessage, NewChatSession};
use crate::models::{ChatAgent, ChatMessage, ChatSession, MessageRole};

use super::{path_id, require_text};

#[derive(Debug, Clone)]
pub struct ChatService {
    api: ApiClient,
}

impl ChatService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /chat/sessions` → `{sessions}`
    pub async fn sessions(&self) -> Result<Vec<ChatSession>> {
        self.api.get_field("/chat/sessions", "sessions").await
    }

    /// `GET /chat/sessions/:id` → `{session}`
    pub async fn session(&self, id: &str) -> Result<ChatSession> {
        let id = path_id("session", id)?;
        self.api
            .get_field(&format!("/chat/sessions/{}", id), "session")
            .await
    }

    /// `POST /chat/sessions` → `{session}`
    pub async fn create_session(&self, title: &str, agent_id: Option<&str>) -> Result<ChatSession> {
        let body = NewChatSession {
            title: require_text("session title", title)?,
            agent_id: agent_id.map(str::to_string),
        };
        self.api.post_field("/chat/sessions", &body, "session").await
    }

    /// `PATCH /chat/sessions/:id` → `{session}`
    pub async fn update_session(&self, id: &str, update: &ChatSessionUpdate) -> Result<ChatSession> {
        let id = path_id("session", id)?;
        let mut update = update.clone();
        if let Some(title) = update.title.as_deref() {
            update.title = Some(require_text("session title", title)?);
        }
        self.api
            .patch_field(&format!("/chat/sessions/{}", id), &update, "session")
            .await
    }

    /// `DELETE /chat/sessions/:id`
    pub async fn delete_session(&self, id: &str) -> Result<()> {
        let id = path_id("session", id)?;
        self.api.delete(&format!("/chat/sessions/{}", id)).await
    }

    /// `GET /chat/sessions/:id/messages` → `{messages}`
    pub async fn messages(&self, session_id: &str) -> Result<Vec<ChatMessage>> {
        let id = path_id("session", session_id)?;
        self.api
            .get_field(&format!("/chat/sessions/{}/messages", id), "messages")
            .await
    }

    /// `POST /chat/sessions/:id/messages` → `{message}`
    pub async fn send_message(&self, session_id: &str, content: &str) -> Result<ChatMessage> {
        let id = path_id("session", session_id)?;
        let body = NewChatMessage {
            content: require_text("message", content)?,
            role: MessageRole::User,
        };
        self.api
            .post_field(&format!("/chat/sessions/{}/messages", id), &body, "message")
            .await
    }

    /// `GET /chat/agents` → `{agents}`
    pub async fn agents(&self) -> Result<Vec<ChatAgent>> {
        self.api.get_field("/chat/agents", "agents").await
    }
}

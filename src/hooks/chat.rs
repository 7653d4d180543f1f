//! Chat sessions, messages and agents

use crate::context::AppContext;
use crate::error::Result;
use crate::models::chat::ChatSessionUpdate;
use crate::models::{ChatAgent, ChatMessage, ChatSession};
use crate::query::{Mutation, QueryState};

use super::{fetcher, keys};

#[derive(Debug, Clone)]
pub struct ChatHook {
    ctx: AppContext,
}

impl ChatHook {
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn sessions(&self) -> QueryState<Vec<ChatSession>> {
        let service = self.ctx.services().chat.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::chat_sessions(),
                fetcher(service, |s| async move { s.sessions().await }),
            )
            .await
    }

    pub async fn session(&self, id: &str) -> QueryState<ChatSession> {
        let service = self.ctx.services().chat.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::chat_session(id),
                fetcher((service, id.to_string()), |(s, id)| async move {
                    s.session(&id).await
                }),
            )
            .await
    }

    pub async fn messages(&self, session_id: &str) -> QueryState<Vec<ChatMessage>> {
        let service = self.ctx.services().chat.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::chat_messages(session_id),
                fetcher((service, session_id.to_string()), |(s, id)| async move {
                    s.messages(&id).await
                }),
            )
            .await
    }

    pub async fn refetch_messages(&self, session_id: &str) -> QueryState<Vec<ChatMessage>> {
        let service = self.ctx.services().chat.clone();
        self.ctx
            .query_client()
            .refetch(
                keys::chat_messages(session_id),
                fetcher((service, session_id.to_string()), |(s, id)| async move {
                    s.messages(&id).await
                }),
            )
            .await
    }

    pub async fn agents(&self) -> QueryState<Vec<ChatAgent>> {
        let service = self.ctx.services().chat.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::chat_agents(),
                fetcher(service, |s| async move { s.agents().await }),
            )
            .await
    }

    /// Create a session and make it the active one
    pub async fn create_session(&self, title: &str, agent_id: Option<&str>) -> Result<ChatSession> {
        let service = &self.ctx.services().chat;
        let session = Mutation::new("create_chat_session")
            .invalidates(keys::chat_sessions())
            .writes_to(|session: &ChatSession| keys::chat_session(&session.id))
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.create_session(title, agent_id)
            })
            .await?;
        self.ctx
            .stores()
            .chat
            .set_active_session(Some(session.id.clone()));
        Ok(session)
    }

    pub async fn update_session(
        &self,
        id: &str,
        update: &ChatSessionUpdate,
    ) -> Result<ChatSession> {
        let service = &self.ctx.services().chat;
        Mutation::new("update_chat_session")
            .invalidates(keys::chat_sessions())
            .writes_to(|session: &ChatSession| keys::chat_session(&session.id))
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.update_session(id, update)
            })
            .await
    }

    pub async fn delete_session(&self, id: &str) -> Result<()> {
        let service = &self.ctx.services().chat;
        Mutation::new("delete_chat_session")
            .removes(keys::chat_session(id))
            .removes(keys::chat_messages(id))
            .invalidates(keys::chat_sessions())
            .success_toast("Conversation deleted")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.delete_session(id)
            })
            .await?;

        let store = &self.ctx.stores().chat;
        if store.snapshot().active_session_id.as_deref() == Some(id) {
            store.set_active_session(None);
        }
        Ok(())
    }

    /// Send a message; the draft is cleared only once the backend accepted it
    pub async fn send_message(&self, session_id: &str, content: &str) -> Result<ChatMessage> {
        let service = &self.ctx.services().chat;
        let message = Mutation::new("send_chat_message")
            .invalidates(keys::chat_messages(session_id))
            .invalidates(keys::chat_sessions())
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.send_message(session_id, content)
            })
            .await?;
        self.ctx.stores().chat.clear_draft();
        Ok(message)
    }

    /// Send the store's draft to the active session
    pub async fn send_draft(&self) -> Result<ChatMessage> {
        let state = self.ctx.stores().chat.snapshot();
        let session_id = state.active_session_id.ok_or_else(|| {
            crate::error::CollabError::Validation("no active conversation".to_string())
        })?;
        self.send_message(&session_id, &state.draft_message).await
    }
}

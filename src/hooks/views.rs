//! Composed views: one query result (or a few) plus one store snapshot
//!
//! Field names are disambiguated where two queries would both expose a
//! loading flag (`is_loading_members` / `is_loading_settings`).

use std::cmp::Ordering;

use crate::context::AppContext;
use crate::models::{
    ChatMessage, ChatSession, Document, DocumentQuery, Notification, TeamMember, TeamSettings,
};
use crate::query::QueryState;
use crate::stores::{
    ChatState, DocumentSort, DocumentsState, NotificationsState, ReadFilter, SortOrder, TeamState,
};

/// Documents page: the filtered list plus the browser state
#[derive(Debug, Clone)]
pub struct DocumentsView {
    pub documents: QueryState<Vec<Document>>,
    pub state: DocumentsState,
}

impl DocumentsView {
    pub async fn load(ctx: &AppContext) -> Self {
        let state = ctx.stores().documents.snapshot();
        let query = Self::query_for(&state, ctx.config().ui.page_size);
        let documents = ctx.documents().list(&query).await;
        Self { documents, state }
    }

    /// Server-side part of the filters; a folder filter applies only when
    /// exactly one folder is selected
    pub fn query_for(state: &DocumentsState, page_size: u32) -> DocumentQuery {
        let folder_id = match state.selected_folder_ids.as_slice() {
            [only] => Some(only.clone()),
            _ => None,
        };
        DocumentQuery {
            search: Some(state.search_query.trim().to_string()).filter(|s| !s.is_empty()),
            folder_id,
            page: Some(state.page),
            limit: Some(page_size),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.documents.is_loading
    }

    /// Documents after the type/tag filters and sort order of the store
    pub fn visible_documents(&self) -> Vec<Document> {
        let mut docs: Vec<Document> = self
            .documents
            .data_or_default()
            .into_iter()
            .filter(|d| match &self.state.file_type_filter {
                Some(ft) => d
                    .mime_type
                    .as_deref()
                    .map(|m| m.contains(ft.as_str()))
                    .unwrap_or(false),
                None => true,
            })
            .filter(|d| match &self.state.tag_filter {
                Some(tag) => d.tags.iter().any(|t| t == tag),
                None => true,
            })
            .collect();

        docs.sort_by(|a, b| {
            let ord = match self.state.sort_by {
                DocumentSort::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                DocumentSort::UpdatedAt => a.updated_at.cmp(&b.updated_at),
                DocumentSort::Size => a.size.cmp(&b.size),
            };
            match self.state.sort_order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });
        docs
    }
}

/// Team page: members, settings and the member-list state
#[derive(Debug, Clone)]
pub struct TeamView {
    pub members: QueryState<Vec<TeamMember>>,
    pub settings: QueryState<TeamSettings>,
    pub state: TeamState,
    pub is_loading_members: bool,
    pub is_loading_settings: bool,
}

impl TeamView {
    pub async fn load(ctx: &AppContext) -> Self {
        let team = ctx.team();
        let (members, settings) = futures::join!(team.members(), team.settings());
        Self {
            is_loading_members: members.is_loading,
            is_loading_settings: settings.is_loading,
            members,
            settings,
            state: ctx.stores().team.snapshot(),
        }
    }

    /// Members matching the role filter and search query
    pub fn filtered_members(&self) -> Vec<TeamMember> {
        let needle = self.state.search_query.trim().to_lowercase();
        self.members
            .data_or_default()
            .into_iter()
            .filter(|m| self.state.role_filter.map_or(true, |role| m.role == role))
            .filter(|m| {
                needle.is_empty()
                    || m.name.to_lowercase().contains(&needle)
                    || m.email.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

/// Chat page: sessions, messages of the active session and chat state
#[derive(Debug, Clone)]
pub struct ChatView {
    pub sessions: QueryState<Vec<ChatSession>>,
    /// `None` when no session is active
    pub messages: Option<QueryState<Vec<ChatMessage>>>,
    pub state: ChatState,
}

impl ChatView {
    pub async fn load(ctx: &AppContext) -> Self {
        let state = ctx.stores().chat.snapshot();
        let chat = ctx.chat();
        let (sessions, messages) = match state.active_session_id.as_deref() {
            Some(id) => {
                let (sessions, messages) = futures::join!(chat.sessions(), chat.messages(id));
                (sessions, Some(messages))
            }
            None => (chat.sessions().await, None),
        };
        Self {
            sessions,
            messages,
            state,
        }
    }

    /// Sessions whose title matches the sidebar search
    pub fn filtered_sessions(&self) -> Vec<ChatSession> {
        let needle = self.state.search_query.trim().to_lowercase();
        self.sessions
            .data_or_default()
            .into_iter()
            .filter(|s| needle.is_empty() || s.title.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Notification centre: list, unread badge and filter state
#[derive(Debug, Clone)]
pub struct NotificationsView {
    pub notifications: QueryState<Vec<Notification>>,
    pub unread_count: QueryState<u64>,
    pub state: NotificationsState,
}

impl NotificationsView {
    pub async fn load(ctx: &AppContext) -> Self {
        let state = ctx.stores().notifications.snapshot();
        let hook = ctx.notifications();
        let unread_only = state.read_filter == ReadFilter::Unread;
        let (notifications, unread_count) =
            futures::join!(hook.list(unread_only), hook.unread_count());
        Self {
            notifications,
            unread_count,
            state,
        }
    }

    /// Notifications after the read and type filters, newest first
    pub fn visible(&self) -> Vec<Notification> {
        let mut items: Vec<Notification> = self
            .notifications
            .data_or_default()
            .into_iter()
            .filter(|n| match self.state.read_filter {
                ReadFilter::All => true,
                ReadFilter::Unread => !n.read,
                ReadFilter::Read => n.read,
            })
            .filter(|n| {
                self.state
                    .type_filter
                    .map_or(true, |t| n.notification_type == t)
            })
            .collect();
        items.sort_by(|a, b| match (a.created_at, b.created_at) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, size: u64, tags: &[&str]) -> Document {
        Document {
            id: name.to_string(),
            name: name.to_string(),
            size,
            mime_type: Some("application/pdf".to_string()),
            parent_id: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            url: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_query_for_uses_single_selected_folder() {
        let mut state = DocumentsState {
            search_query: "  plan ".to_string(),
            page: 2,
            ..Default::default()
        };
        state.selected_folder_ids = vec!["f1".to_string()];
        let query = DocumentsView::query_for(&state, 20);
        assert_eq!(query.search.as_deref(), Some("plan"));
        assert_eq!(query.folder_id.as_deref(), Some("f1"));
        assert_eq!(query.page, Some(2));

        state.selected_folder_ids.push("f2".to_string());
        assert_eq!(DocumentsView::query_for(&state, 20).folder_id, None);
    }

    #[test]
    fn test_visible_documents_filters_and_sorts() {
        let view = DocumentsView {
            documents: QueryState {
                data: Some(vec![
                    doc("b", 30, &["finance"]),
                    doc("a", 10, &["finance"]),
                    doc("c", 20, &[]),
                ]),
                ..Default::default()
            },
            state: DocumentsState {
                tag_filter: Some("finance".to_string()),
                sort_by: DocumentSort::Size,
                sort_order: SortOrder::Asc,
                ..Default::default()
            },
        };
        let names: Vec<String> = view.visible_documents().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}

//! Document queries and mutations

use crate::context::AppContext;
use crate::error::Result;
use crate::models::document::{DocumentUpdate, NewDocument};
use crate::models::{Document, DocumentQuery};
use crate::query::{Mutation, QueryState};

use super::{fetcher, keys};

#[derive(Debug, Clone)]
pub struct DocumentsHook {
    ctx: AppContext,
}

impl DocumentsHook {
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn list(&self, query: &DocumentQuery) -> QueryState<Vec<Document>> {
        let service = self.ctx.services().documents.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::document_list(query),
                fetcher((service, query.clone()), |(s, q)| async move {
                    s.list(&q).await
                }),
            )
            .await
    }

    pub async fn refetch_list(&self, query: &DocumentQuery) -> QueryState<Vec<Document>> {
        let service = self.ctx.services().documents.clone();
        self.ctx
            .query_client()
            .refetch(
                keys::document_list(query),
                fetcher((service, query.clone()), |(s, q)| async move {
                    s.list(&q).await
                }),
            )
            .await
    }

    pub async fn get(&self, id: &str) -> QueryState<Document> {
        let service = self.ctx.services().documents.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::document(id),
                fetcher((service, id.to_string()), |(s, id)| async move {
                    s.get(&id).await
                }),
            )
            .await
    }

    pub async fn create(&self, input: &NewDocument) -> Result<Document> {
        let service = &self.ctx.services().documents;
        Mutation::new("create_document")
            .invalidates(keys::dashboard())
            .invalidates(keys::documents())
            .invalidates(keys::folders())
            .writes_to(|doc: &Document| keys::document(&doc.id))
            .success_toast("Document created")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.create(input)
            })
            .await
    }

    pub async fn update(&self, id: &str, update: &DocumentUpdate) -> Result<Document> {
        let service = &self.ctx.services().documents;
        Mutation::new("update_document")
            .invalidates(keys::dashboard())
            .invalidates(keys::documents())
            .invalidates(keys::folders())
            .writes_to(|doc: &Document| keys::document(&doc.id))
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.update(id, update)
            })
            .await
    }

    /// Delete a document; clears the selection when it was selected
    pub async fn delete(&self, id: &str) -> Result<()> {
        let service = &self.ctx.services().documents;
        Mutation::new("delete_document")
            .invalidates(keys::dashboard())
            .removes(keys::document(id))
            .invalidates(keys::documents())
            .invalidates(keys::folders())
            .success_toast("Document deleted")
            .run(self.ctx.query_client(), self.ctx.notifier(), || service.delete(id))
            .await?;

        let store = &self.ctx.stores().documents;
        if store.snapshot().selected_document_id.as_deref() == Some(id) {
            store.select_document(None);
        }
        Ok(())
    }
}

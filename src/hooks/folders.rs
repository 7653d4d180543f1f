//! Folder queries and mutations

use crate::context::AppContext;
use crate::error::Result;
use crate::models::document::{FolderUpdate, NewFolder};
use crate::models::{Document, Folder};
use crate::query::{Mutation, QueryState};

use super::{fetcher, keys};

#[derive(Debug, Clone)]
pub struct FoldersHook {
    ctx: AppContext,
}

impl FoldersHook {
    pub fn new(ctx: &AppContext) -> Self {
        Self { ctx: ctx.clone() }
    }

    pub async fn list(&self) -> QueryState<Vec<Folder>> {
        let service = self.ctx.services().folders.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::folder_list(),
                fetcher(service, |s| async move { s.list().await }),
            )
            .await
    }

    pub async fn get(&self, id: &str) -> QueryState<Folder> {
        let service = self.ctx.services().folders.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::folder(id),
                fetcher((service, id.to_string()), |(s, id)| async move {
                    s.get(&id).await
                }),
            )
            .await
    }

    pub async fn documents(&self, id: &str) -> QueryState<Vec<Document>> {
        let service = self.ctx.services().folders.clone();
        self.ctx
            .query_client()
            .fetch_query(
                keys::folder_documents(id),
                fetcher((service, id.to_string()), |(s, id)| async move {
                    s.documents(&id).await
                }),
            )
            .await
    }

    pub async fn create(&self, input: &NewFolder) -> Result<Folder> {
        let service = &self.ctx.services().folders;
        let folder = Mutation::new("create_folder")
            .invalidates(keys::folders())
            .writes_to(|folder: &Folder| keys::folder(&folder.id))
            .success_toast("Folder created")
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.create(input)
            })
            .await?;
        self.ctx.stores().documents.set_create_folder_modal_open(false);
        Ok(folder)
    }

    pub async fn update(&self, id: &str, update: &FolderUpdate) -> Result<Folder> {
        let service = &self.ctx.services().folders;
        Mutation::new("update_folder")
            .invalidates(keys::folders())
            .writes_to(|folder: &Folder| keys::folder(&folder.id))
            .run(self.ctx.query_client(), self.ctx.notifier(), || {
                service.update(id, update)
            })
            .await
    }

    /// Delete a folder; documents may move, so document queries refetch too
    pub async fn delete(&self, id: &str) -> Result<()> {
        let service = &self.ctx.services().folders;
        Mutation::new("delete_folder")
            .removes(keys::folder(id))
            .removes(keys::folder_documents(id))
            .invalidates(keys::folders())
            .invalidates(keys::documents())
            .success_toast("Folder deleted")
            .run(self.ctx.query_client(), self.ctx.notifier(), || service.delete(id))
            .await?;

        let store = &self.ctx.stores().documents;
        if store
            .snapshot()
            .selected_folder_ids
            .iter()
            .any(|selected| selected == id)
        {
            store.toggle_folder_selection(id);
        }
        Ok(())
    }
}

//! Folder CRUD and folder contents

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::document::{FolderUpdate, NewFolder};
use crate::models::{Document, Folder};

use super::{path_id, require_text};

#[derive(Debug, Clone)]
pub struct FolderService {
    api: ApiClient,
}

impl FolderService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /folders` → raw array
    pub async fn list(&self) -> Result<Vec<Folder>> {
        self.api.get("/folders").await
    }

    /// `GET /folders/:id`
    pub async fn get(&self, id: &str) -> Result<Folder> {
        let id = path_id("folder", id)?;
        self.api.get(&format!("/folders/{}", id)).await
    }

    /// `POST /folders`
    pub async fn create(&self, input: &NewFolder) -> Result<Folder> {
        let mut input = input.clone();
        input.name = require_text("folder name", &input.name)?;
        self.api.post("/folders", &input).await
    }

    /// `PATCH /folders/:id`
    pub async fn update(&self, id: &str, update: &FolderUpdate) -> Result<Folder> {
        let id = path_id("folder", id)?;
        let mut update = update.clone();
        if let Some(name) = update.name.as_deref() {
            update.name = Some(require_text("folder name", name)?);
        }
        self.api.patch(&format!("/folders/{}", id), &update).await
    }

    /// `DELETE /folders/:id`
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = path_id("folder", id)?;
        self.api.delete(&format!("/folders/{}", id)).await
    }

    /// `GET /folders/:id/documents` → `{documents}`
    pub async fn documents(&self, id: &str) -> Result<Vec<Document>> {
        let id = path_id("folder", id)?;
        self.api
            .get_field(&format!("/folders/{}/documents", id), "documents")
            .await
    }
}

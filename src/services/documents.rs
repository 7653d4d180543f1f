//! Document CRUD

use crate::error::Result;
use crate::http::ApiClient;
use crate::models::document::{DocumentUpdate, NewDocument};
use crate::models::{Document, DocumentQuery};

use super::{path_id, require_text};

#[derive(Debug, Clone)]
pub struct DocumentService {
    api: ApiClient,
}

impl DocumentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /documents` → raw array
    pub async fn list(&self, query: &DocumentQuery) -> Result<Vec<Document>> {
        self.api
            .get_with_query("/documents", &query.to_params())
            .await
    }

    /// `GET /documents/:id`
    pub async fn get(&self, id: &str) -> Result<Document> {
        let id = path_id("document", id)?;
        self.api.get(&format!("/documents/{}", id)).await
    }

    /// `POST /documents`
    pub async fn create(&self, input: &NewDocument) -> Result<Document> {
        let mut input = input.clone();
        input.name = require_text("document name", &input.name)?;
        self.api.post("/documents", &input).await
    }

    /// `PATCH /documents/:id`
    pub async fn update(&self, id: &str, update: &DocumentUpdate) -> Result<Document> {
        let id = path_id("document", id)?;
        let mut update = update.clone();
        if let Some(name) = update.name.as_deref() {
            update.name = Some(require_text("document name", name)?);
        }
        self.api.patch(&format!("/documents/{}", id), &update).await
    }

    /// `DELETE /documents/:id`
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = path_id("document", id)?;
        self.api.delete(&format!("/documents/{}", id)).await
    }
}

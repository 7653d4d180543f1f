//! Profile of the signed-in user

use crate::error::{CollabError, Result};
use crate::http::ApiClient;
use crate::models::{ProfileUpdate, User};

use super::require_email;

#[derive(Debug, Clone)]
pub struct ProfileService {
    api: ApiClient,
}

impl ProfileService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /profile` → `{user}`
    pub async fn get_profile(&self) -> Result<User> {
        self.api.get_field("/profile", "user").await
    }

    /// `PATCH /profile` → `{user}`
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        let mut update = update.clone();
        if let Some(email) = update.email.as_deref() {
            update.email = Some(require_email(email)?);
        }
        if matches!(update.name.as_deref(), Some(n) if n.trim().is_empty()) {
            return Err(CollabError::Validation("name cannot be blank".to_string()));
        }
        self.api.patch_field("/profile", &update, "user").await
    }
}

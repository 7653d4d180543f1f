//! Authentication endpoints

use crate::error::{CollabError, Result};
use crate::http::ApiClient;
use crate::models::user::{LoginRequest, RegisterRequest};
use crate::models::{AuthResponse, User};

use super::{require_email, require_text};

const MIN_PASSWORD_LEN: usize = 8;

/// `/auth/*` endpoints
#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `POST /auth/login` → `{user, token}`
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let email = require_email(email)?;
        if password.is_empty() {
            return Err(CollabError::Validation("password is required".to_string()));
        }
        self.api
            .post(
                "/auth/login",
                &LoginRequest {
                    email,
                    password: password.to_string(),
                },
            )
            .await
    }

    /// `POST /auth/register` → `{user, token}`
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse> {
        let name = require_text("name", name)?;
        let email = require_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CollabError::Validation(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        self.api
            .post(
                "/auth/register",
                &RegisterRequest {
                    name,
                    email,
                    password: password.to_string(),
                },
            )
            .await
    }

    /// `POST /auth/logout`
    pub async fn logout(&self) -> Result<()> {
        self.api.post_empty("/auth/logout").await
    }

    /// `GET /auth/me` → `{user}`
    pub async fn me(&self) -> Result<User> {
        self.api.get_field("/auth/me", "user").await
    }
}

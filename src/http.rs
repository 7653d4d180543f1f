//! HTTP transport for the CollabDesk backend
//!
//! [`ApiClient`] is the thin wrapper every resource service talks through.
//! It owns the `reqwest` client, the backend base URL and the credentials,
//! and it turns non-success responses into [`CollabError`] values with the
//! right [`crate::error::ErrorKind`].
//!
//! # Headers
//!
//! Every request carries `apikey: <anon key>`. The `Authorization` header is
//! `Bearer <session token>` once a user is signed in and `Bearer <anon key>`
//! otherwise.
//!
//! # Envelopes
//!
//! Some endpoints return the payload directly, others wrap it in a single
//! named field (`{"session": {...}}`). The `*_field` helpers unwrap that one
//! field and nothing else.
//!
//! Each helper performs exactly one HTTP request. Retries and caching belong
//! to [`crate::query`].

use std::sync::Arc;
use std::time::Instant;

use metrics::histogram;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::config::BackendConfig;
use crate::error::{CollabError, Result};

/// Query-string pairs appended to a request
pub type QueryParams = Vec<(&'static str, String)>;

/// HTTP client for the CollabDesk backend.
///
/// Cloning is cheap; clones share the connection pool and the session token.
///
/// # Examples
///
/// ```no_run
/// use collabdesk::config::BackendConfig;
/// use collabdesk::http::ApiClient;
///
/// let backend = BackendConfig {
///     url: Some("https://api.example.com".to_string()),
///     anon_key: Some("anon".to_string()),
///     ..Default::default()
/// };
/// let client = ApiClient::new(&backend).unwrap();
/// assert_eq!(client.base_url(), "https://api.example.com");
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Underlying reqwest HTTP client.
    http_client: reqwest::Client,
    /// Backend base URL without a trailing slash.
    base_url: String,
    /// Anonymous access key.
    anon_key: String,
    /// Bearer token of the signed-in user.
    session_token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Construct a client from the backend configuration.
    ///
    /// Placeholders are used when the URL or key are missing; no network I/O
    /// happens here.
    ///
    /// # Errors
    ///
    /// Returns `CollabError::Config` if the HTTP client cannot be built.
    pub fn new(backend: &BackendConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(backend.timeout())
            .build()
            .map_err(|e| CollabError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: backend
                .url_or_placeholder()
                .trim_end_matches('/')
                .to_string(),
            anon_key: backend.anon_key_or_placeholder().to_string(),
            session_token: Arc::new(RwLock::new(None)),
        })
    }

    /// Backend base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace (or clear) the session token used for `Authorization`
    pub async fn set_session_token(&self, token: Option<String>) {
        *self.session_token.write().await = token;
    }

    /// Current session token, if signed in
    pub async fn session_token(&self) -> Option<String> {
        self.session_token.read().await.clone()
    }

    /// Issue one request and return the decoded JSON body.
    ///
    /// Empty bodies (e.g. `204 No Content`) decode to `Value::Null`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let bearer = self
            .session_token()
            .await
            .unwrap_or_else(|| self.anon_key.clone());

        let mut builder = self
            .http_client
            .request(method.clone(), &url)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", bearer));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        tracing::debug!(%method, path, "Sending backend request");
        let started = Instant::now();
        let response = builder.send().await.map_err(|e| {
            tracing::error!(%method, path, "Backend request failed: {}", e);
            CollabError::Network(format!("Failed to reach backend: {}", e))
        })?;
        histogram!(
            "http_request_duration_seconds",
            started.elapsed().as_secs_f64(),
            "method" => method.to_string()
        );

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CollabError::Network(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let message = error_message(&text)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").into());
            tracing::error!(%method, path, "Backend returned error {}: {}", status, message);
            return Err(CollabError::from_status(status.as_u16(), message));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| {
            CollabError::Decode(format!("Invalid JSON from {} {}: {}", method, path, e))
        })
    }

    /// GET a raw payload
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_query(path, &[]).await
    }

    /// GET a raw payload with query parameters
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        decode(self.request(Method::GET, path, query, None).await?)
    }

    /// GET and unwrap one envelope field
    pub async fn get_field<T: DeserializeOwned>(&self, path: &str, field: &str) -> Result<T> {
        unwrap_field(self.request(Method::GET, path, &[], None).await?, field)
    }

    /// GET with query parameters and unwrap one envelope field
    pub async fn get_field_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
        field: &str,
    ) -> Result<T> {
        unwrap_field(self.request(Method::GET, path, query, None).await?, field)
    }

    /// POST a body and decode the raw response
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let body = serde_json::to_value(body)?;
        decode(self.request(Method::POST, path, &[], Some(&body)).await?)
    }

    /// POST a body and unwrap one envelope field
    pub async fn post_field<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        field: &str,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        unwrap_field(
            self.request(Method::POST, path, &[], Some(&body)).await?,
            field,
        )
    }

    /// POST without a body, ignoring the response
    pub async fn post_empty(&self, path: &str) -> Result<()> {
        self.request(Method::POST, path, &[], None).await?;
        Ok(())
    }

    /// POST without a body and decode the raw response
    pub async fn post_empty_for<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        decode(self.request(Method::POST, path, &[], None).await?)
    }

    /// PATCH a body and decode the raw response
    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        decode(self.request(Method::PATCH, path, &[], Some(&body)).await?)
    }

    /// PATCH a body and unwrap one envelope field
    pub async fn patch_field<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        field: &str,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        unwrap_field(
            self.request(Method::PATCH, path, &[], Some(&body)).await?,
            field,
        )
    }

    /// PATCH without a body, ignoring the response
    pub async fn patch_empty(&self, path: &str) -> Result<()> {
        self.request(Method::PATCH, path, &[], None).await?;
        Ok(())
    }

    /// DELETE, ignoring the response
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.request(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    /// DELETE and unwrap one envelope field
    pub async fn delete_field<T: DeserializeOwned>(&self, path: &str, field: &str) -> Result<T> {
        unwrap_field(self.request(Method::DELETE, path, &[], None).await?, field)
    }
}

/// Decode a raw JSON payload
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| CollabError::Decode(e.to_string()))
}

/// Extract and decode one envelope field
///
/// # Examples
///
/// ```
/// use collabdesk::http::unwrap_field;
/// use serde_json::json;
///
/// let count: u32 = unwrap_field(json!({"count": 3}), "count").unwrap();
/// assert_eq!(count, 3);
/// assert!(unwrap_field::<u32>(json!({}), "count").is_err());
/// ```
pub fn unwrap_field<T: DeserializeOwned>(mut value: Value, field: &str) -> Result<T> {
    match value.get_mut(field) {
        Some(inner) => decode(inner.take()),
        None => Err(CollabError::Decode(format!(
            "response is missing the '{}' field",
            field
        ))),
    }
}

/// Pull a human-readable message out of an error body
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(json) => ["message", "error", "error_description"]
            .iter()
            .find_map(|k| json.get(*k).and_then(Value::as_str))
            .map(str::to_string)
            .or_else(|| Some(trimmed.to_string())),
        Err(_) => Some(trimmed.to_string()),
    }
}

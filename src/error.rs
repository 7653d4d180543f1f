//! Error types for CollabDesk
//!
//! This module defines the error type shared by the transport, the resource
//! services, the query cache and the hooks, using `thiserror` for ergonomic
//! error handling.
//!
//! Every error collapses into one of a small, closed set of [`ErrorKind`]s so
//! that callers (and the notification surface) can react uniformly without
//! inspecting message strings.

use thiserror::Error;

/// Closed classification of every failure the client layer can surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The backend could not be reached or the connection failed mid-request
    Network,
    /// Input was rejected, either locally or by the backend (400/422)
    Validation,
    /// The requested resource does not exist (404)
    NotFound,
    /// Missing or rejected credentials (401/403)
    Unauthorized,
    /// Anything else
    Unknown,
}

impl ErrorKind {
    /// Whether a failed request of this kind may be retried by the query cache
    ///
    /// # Examples
    ///
    /// ```
    /// use collabdesk::error::ErrorKind;
    ///
    /// assert!(ErrorKind::Network.is_retryable());
    /// assert!(!ErrorKind::NotFound.is_retryable());
    /// ```
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorKind::Network | ErrorKind::Unknown)
    }
}

/// Main error type for CollabDesk operations
///
/// Variants carry plain messages rather than source errors so the type is
/// `Clone`; query states keep the last error next to the last known data.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollabError {
    /// Connection or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Client-side or server-side validation failure
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication or authorization failure
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-success response from the backend
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code returned by the backend
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Keyring/credential storage errors
    #[error("Credential store error: {0}")]
    Credentials(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),
}

impl CollabError {
    /// Classify this error into its [`ErrorKind`]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CollabError::Network(_) => ErrorKind::Network,
            CollabError::Validation(_) => ErrorKind::Validation,
            CollabError::NotFound(_) => ErrorKind::NotFound,
            CollabError::Unauthorized(_) => ErrorKind::Unauthorized,
            CollabError::Api { .. }
            | CollabError::Decode(_)
            | CollabError::Config(_)
            | CollabError::Credentials(_)
            | CollabError::Io(_) => ErrorKind::Unknown,
        }
    }

    /// Whether retrying the failed operation could succeed
    ///
    /// Follows [`ErrorKind::is_retryable`], except that local failures
    /// (decode, configuration, credential store and IO) never change on a
    /// second attempt.
    ///
    /// # Examples
    ///
    /// ```
    /// use collabdesk::error::CollabError;
    ///
    /// assert!(CollabError::from_status(503, "down").is_retryable());
    /// assert!(!CollabError::Decode("missing field `id`".to_string()).is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            CollabError::Decode(_)
            | CollabError::Config(_)
            | CollabError::Credentials(_)
            | CollabError::Io(_) => false,
            other => other.kind().is_retryable(),
        }
    }

    /// Human-readable message for toasts and CLI output
    ///
    /// Unlike `Display`, this omits the category prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use collabdesk::error::CollabError;
    ///
    /// let error = CollabError::NotFound("document doc-1".to_string());
    /// assert_eq!(error.user_message(), "document doc-1");
    /// ```
    pub fn user_message(&self) -> String {
        match self {
            CollabError::Network(m)
            | CollabError::Validation(m)
            | CollabError::NotFound(m)
            | CollabError::Unauthorized(m)
            | CollabError::Decode(m)
            | CollabError::Config(m)
            | CollabError::Credentials(m)
            | CollabError::Io(m) => m.clone(),
            CollabError::Api { message, .. } => message.clone(),
        }
    }

    /// Build an error from an HTTP status code and response message
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            400 | 422 => CollabError::Validation(message),
            401 | 403 => CollabError::Unauthorized(message),
            404 => CollabError::NotFound(message),
            _ => CollabError::Api { status, message },
        }
    }
}

impl From<std::io::Error> for CollabError {
    fn from(error: std::io::Error) -> Self {
        CollabError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for CollabError {
    fn from(error: serde_json::Error) -> Self {
        CollabError::Decode(error.to_string())
    }
}

impl From<serde_yaml::Error> for CollabError {
    fn from(error: serde_yaml::Error) -> Self {
        CollabError::Config(error.to_string())
    }
}

impl From<reqwest::Error> for CollabError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            CollabError::Decode(error.to_string())
        } else if let Some(status) = error.status() {
            CollabError::from_status(status.as_u16(), error.to_string())
        } else {
            CollabError::Network(error.to_string())
        }
    }
}

impl From<keyring::Error> for CollabError {
    fn from(error: keyring::Error) -> Self {
        CollabError::Credentials(error.to_string())
    }
}

/// Result type alias for CollabDesk library operations
pub type Result<T> = std::result::Result<T, CollabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_display() {
        let error = CollabError::Network("connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: connection refused");
        assert_eq!(error.kind(), ErrorKind::Network);
    }

    #[test]
    fn test_api_error_display() {
        let error = CollabError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "API error 500: boom");
        assert_eq!(error.kind(), ErrorKind::Unknown);
    }

    #[test]
    fn test_from_status_mapping() {
        assert_eq!(
            CollabError::from_status(400, "bad").kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            CollabError::from_status(422, "bad").kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            CollabError::from_status(401, "nope").kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            CollabError::from_status(403, "nope").kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            CollabError::from_status(404, "gone").kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            CollabError::from_status(503, "down").kind(),
            ErrorKind::Unknown
        );
    }

    #[test]
    fn test_user_message_strips_prefix() {
        let error = CollabError::Validation("email is required".to_string());
        assert_eq!(error.user_message(), "email is required");

        let error = CollabError::from_status(502, "bad gateway");
        assert_eq!(error.user_message(), "bad gateway");
    }

    #[test]
    fn test_retryable_kinds() {
        assert!(ErrorKind::Network.is_retryable());
        assert!(ErrorKind::Unknown.is_retryable());
        assert!(!ErrorKind::Validation.is_retryable());
        assert!(!ErrorKind::NotFound.is_retryable());
        assert!(!ErrorKind::Unauthorized.is_retryable());
    }

    #[test]
    fn test_local_failures_are_not_retryable() {
        assert!(CollabError::Network("reset".to_string()).is_retryable());
        assert!(CollabError::from_status(500, "boom").is_retryable());

        let decode = CollabError::Decode("missing field `id`".to_string());
        assert_eq!(decode.kind(), ErrorKind::Unknown);
        assert!(!decode.is_retryable());
        assert!(!CollabError::Config("bad url".to_string()).is_retryable());
        assert!(!CollabError::Credentials("locked".to_string()).is_retryable());
        assert!(!CollabError::NotFound("doc".to_string()).is_retryable());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: CollabError = io_error.into();
        assert!(matches!(error, CollabError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let error: CollabError = json_error.into();
        assert!(matches!(error, CollabError::Decode(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("invalid: : yaml").unwrap_err();
        let error: CollabError = yaml_error.into();
        assert!(matches!(error, CollabError::Config(_)));
    }

    #[test]
    fn test_error_is_send_sync_clone() {
        fn assert_bounds<T: Send + Sync + Clone>() {}
        assert_bounds::<CollabError>();
    }
}

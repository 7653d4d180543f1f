//! Resource services
//!
//! One service per backend resource. Each method maps to exactly one REST
//! operation and performs exactly one request through [`ApiClient`]; the only
//! transformation applied to responses is unwrapping a single envelope field.
//! Cheap local validation (empty names, malformed emails, unsafe ids) fails
//! with `CollabError::Validation` before any request is made.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{CollabError, Result};

pub mod activity;
pub mod ai_modules;
pub mod auth;
pub mod chat;
pub mod documents;
pub mod folders;
pub mod integrations;
pub mod notifications;
pub mod payment;
pub mod profile;
pub mod team;
pub mod workflows;

pub use activity::ActivityService;
pub use ai_modules::AiModuleService;
pub use auth::AuthService;
pub use chat::ChatService;
pub use documents::DocumentService;
pub use folders::FolderService;
pub use integrations::IntegrationService;
pub use notifications::NotificationService;
pub use payment::PaymentService;
pub use profile::ProfileService;
pub use team::TeamService;
pub use workflows::WorkflowService;

/// Check that an identifier is safe to splice into a URL path
pub(crate) fn path_id<'a>(resource: &str, id: &'a str) -> Result<&'a str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(CollabError::Validation(format!("{} id is required", resource)));
    }
    if id.contains(['/', '?', '#']) || id.chars().any(char::is_whitespace) {
        return Err(CollabError::Validation(format!(
            "{} id '{}' contains invalid characters",
            resource, id
        )));
    }
    Ok(id)
}

/// Trim a required text field, rejecting blank values
pub(crate) fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CollabError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Validate and normalise an email address
pub(crate) fn require_email(value: &str) -> Result<String> {
    let email = value.trim();
    if email.is_empty() {
        return Err(CollabError::Validation("email is required".to_string()));
    }
    if !email_regex().is_match(email) {
        return Err(CollabError::Validation(format!(
            "'{}' is not a valid email address",
            email
        )));
    }
    Ok(email.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_id_rejects_unsafe_ids() {
        assert_eq!(path_id("document", " d1 ").unwrap(), "d1");
        assert!(path_id("document", "").is_err());
        assert!(path_id("document", "a/b").is_err());
        assert!(path_id("document", "a b").is_err());
        assert!(path_id("document", "a?x=1").is_err());
    }

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("name", "  Report ").unwrap(), "Report");
        let err = require_text("name", "   ").unwrap_err();
        assert_eq!(err.user_message(), "name is required");
    }

    #[test]
    fn test_require_email() {
        assert_eq!(
            require_email(" Ana@Example.com ").unwrap(),
            "ana@example.com"
        );
        assert!(require_email("ana").is_err());
        assert!(require_email("ana@example").is_err());
        assert!(require_email("").is_err());
    }
}

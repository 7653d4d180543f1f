//! Configuration loading from files and environment

mod common;

use serial_test::serial;

use collabdesk::cli::Cli;
use collabdesk::{AppContext, Config};

use common::temp_config_file;

fn clear_env() {
    for var in [
        "COLLABDESK_BACKEND_URL",
        "COLLABDESK_ANON_KEY",
        "COLLABDESK_TIMEOUT_SECONDS",
        "COLLABDESK_STALE_TIME_SECONDS",
        "COLLABDESK_GC_TIME_SECONDS",
        "COLLABDESK_LOG_LEVEL",
        "COLLABDESK_JSON_LOGS",
    ] {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_file_values_then_env_overrides() {
    clear_env();
    let (_dir, path) = temp_config_file(
        r#"
backend:
  url: https://desk.example.com
  anon_key: file-key
query:
  stale_time_seconds: 60
  gc_time_seconds: 120
ui:
  page_size: 50
"#,
    );
    std::env::set_var("COLLABDESK_ANON_KEY", "env-key");

    let config = Config::load(path.to_str().unwrap(), &Cli::default()).unwrap();
    clear_env();

    assert_eq!(config.backend.url.as_deref(), Some("https://desk.example.com"));
    assert_eq!(config.backend.anon_key.as_deref(), Some("env-key"));
    assert_eq!(config.query.stale_time_seconds, 60);
    assert_eq!(config.query.gc_time_seconds, 120);
    assert_eq!(config.query.query_retries, 3);
    assert_eq!(config.ui.page_size, 50);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_missing_file_starts_with_placeholders() {
    clear_env();
    let config = Config::load("/nonexistent/collabdesk.yaml", &Cli::default()).unwrap();
    assert!(config.backend.is_placeholder());

    // Construction never talks to the backend, so placeholders are accepted.
    let ctx = AppContext::new(config).unwrap();
    assert!(!ctx.auth().is_authenticated());
}

#[test]
#[serial]
fn test_gc_time_shorter_than_stale_time_is_invalid() {
    clear_env();
    let (_dir, path) = temp_config_file(
        "query:\n  stale_time_seconds: 300\n  gc_time_seconds: 10\n",
    );
    let config = Config::load(path.to_str().unwrap(), &Cli::default()).unwrap();
    assert!(config.validate().is_err());
    assert!(AppContext::new(config).is_err());
}

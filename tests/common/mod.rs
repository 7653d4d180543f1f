use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::MockServer;

use collabdesk::config::{BackendConfig, Config};
use collabdesk::credentials::MemorySessionStore;
use collabdesk::AppContext;

/// Configuration pointing at `server` with millisecond retry delays
#[allow(dead_code)]
pub fn test_config(server: &MockServer) -> Config {
    let mut config = Config {
        backend: BackendConfig {
            url: Some(server.uri()),
            anon_key: Some("test-anon-key".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    config.query.retry_base_delay_ms = 1;
    config.query.retry_max_delay_ms = 1;
    config
}

/// Context against `server` with an in-memory session store
#[allow(dead_code)]
pub fn test_context(server: &MockServer) -> (AppContext, Arc<MemorySessionStore>) {
    let sessions = Arc::new(MemorySessionStore::new());
    let ctx = AppContext::new(test_config(server))
        .expect("context should build")
        .with_session_store(sessions.clone());
    (ctx, sessions)
}

#[allow(dead_code)]
pub fn user_json(id: &str) -> Value {
    json!({"id": id, "name": "Ana Lima", "email": "ana@example.com"})
}

#[allow(dead_code)]
pub fn document_json(id: &str, name: &str, size: u64) -> Value {
    json!({"id": id, "name": name, "size": size, "tags": []})
}

#[allow(dead_code)]
pub fn member_json(id: &str, role: &str) -> Value {
    json!({"id": id, "name": format!("Member {}", id), "email": format!("{}@example.com", id), "role": role})
}

#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, contents).expect("failed to write config file");
    (temp_dir, config_path)
}

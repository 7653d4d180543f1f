//! Binary-level tests for the collabdesk CLI

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{document_json, temp_config_file};

fn collabdesk() -> Command {
    let mut cmd = Command::cargo_bin("collabdesk").unwrap();
    for var in [
        "COLLABDESK_BACKEND_URL",
        "COLLABDESK_ANON_KEY",
        "COLLABDESK_LOG_LEVEL",
        "COLLABDESK_JSON_LOGS",
        "COLLABDESK_PASSWORD",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help_lists_resource_commands() {
    collabdesk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("documents"))
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("auth"));
}

#[test]
fn test_missing_subcommand_fails() {
    collabdesk().assert().failure();
}

#[test]
fn test_invalid_backend_url_is_rejected() {
    let (_dir, config) = temp_config_file("backend:\n  url: ftp://files.example.com\n");
    collabdesk()
        .args(["--no-keyring", "--config"])
        .arg(&config)
        .args(["documents", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_unparseable_config_is_rejected() {
    let (_dir, config) = temp_config_file("query: [not, a, map]\n");
    collabdesk()
        .args(["--no-keyring", "--config"])
        .arg(&config)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_documents_list_json_against_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            document_json("d1", "Roadmap.md", 10)
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        collabdesk()
            .env("COLLABDESK_BACKEND_URL", uri)
            .args(["--no-keyring", "--config", "does-not-exist.yaml"])
            .args(["documents", "list", "--json"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let docs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(docs[0]["id"], "d1");
    assert_eq!(docs[0]["name"], "Roadmap.md");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dashboard_json_reports_soft_failures_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            document_json("d1", "a", 100),
            document_json("d2", "b", 50)
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/team/members"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/activities"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        collabdesk()
            .env("COLLABDESK_BACKEND_URL", uri)
            .args(["--no-keyring", "--config", "does-not-exist.yaml"])
            .args(["dashboard", "--json"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["totalDocuments"], 2);
    assert_eq!(stats["totalMembers"], 0);
    assert_eq!(stats["storageUsed"], 150);
    assert_eq!(stats["recentActivities"], json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_login_exits_with_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let assert = tokio::task::spawn_blocking(move || {
        collabdesk()
            .env("COLLABDESK_BACKEND_URL", uri)
            .env("COLLABDESK_PASSWORD", "wrong")
            .args(["--no-keyring", "--config", "does-not-exist.yaml"])
            .args(["auth", "login", "--email", "ana@example.com"])
            .assert()
    })
    .await
    .unwrap();

    assert
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));
}

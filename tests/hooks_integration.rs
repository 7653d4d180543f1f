//! Hooks, cache and mutations end to end against a mock backend

mod common;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use collabdesk::hooks::keys;
use collabdesk::models::document::NewDocument;
use collabdesk::models::notification::NotificationSettingsUpdate;
use collabdesk::models::team::TeamSettingsUpdate;
use collabdesk::models::DocumentQuery;
use collabdesk::notify::ToastLevel;
use collabdesk::ErrorKind;

use common::{document_json, member_json, test_context};

fn new_document(name: &str) -> NewDocument {
    NewDocument {
        name: name.to_string(),
        parent_id: None,
        tags: Vec::new(),
        content: None,
    }
}

async fn mount_documents(server: &MockServer, expected_requests: u64) {
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            document_json("d1", "Roadmap.md", 10),
            document_json("d2", "Budget.xlsx", 20)
        ])))
        .expect(expected_requests)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_dashboard_tolerates_member_and_activity_failures() {
    let server = MockServer::start().await;
    mount_documents(&server, 1).await;
    Mock::given(method("GET"))
        .and(path("/team/members"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/activities"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let (ctx, _) = test_context(&server);
    let stats = ctx
        .dashboard()
        .stats()
        .await
        .into_result()
        .expect("documents succeeded, so the summary succeeds");

    assert_eq!(stats.total_documents, 2);
    assert_eq!(stats.total_members, 0);
    assert!(stats.recent_activities.is_empty());
    assert_eq!(stats.storage_used, 30);
}

#[tokio::test]
async fn test_dashboard_fails_when_documents_fail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "forbidden"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/team/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([member_json("m1", "owner")])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/activities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"activities": []})))
        .mount(&server)
        .await;

    let (ctx, _) = test_context(&server);
    let state = ctx.dashboard().stats().await;
    assert!(state.data.is_none());
    assert_eq!(
        state.error.map(|e| e.kind()),
        Some(ErrorKind::Unauthorized)
    );
}

#[tokio::test]
async fn test_fresh_reads_are_served_from_cache() {
    let server = MockServer::start().await;
    mount_documents(&server, 1).await;

    let (ctx, _) = test_context(&server);
    let query = DocumentQuery::default();
    let first = ctx.documents().list(&query).await;
    let second = ctx.documents().list(&query).await;

    assert_eq!(first.data_or_default().len(), 2);
    assert_eq!(second.data, first.data);
    assert!(!second.is_stale);
}

#[tokio::test]
async fn test_successful_mutation_invalidates_list() {
    let server = MockServer::start().await;
    mount_documents(&server, 2).await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(201).set_body_json(document_json("d3", "Notes", 5)))
        .expect(1)
        .mount(&server)
        .await;

    let (ctx, _) = test_context(&server);
    let mut toasts = ctx.notifier().subscribe();
    let query = DocumentQuery::default();

    ctx.documents().list(&query).await;
    let created = ctx
        .documents()
        .create(&new_document("Notes"))
        .await
        .expect("create");
    assert_eq!(created.id, "d3");

    // Detail cache is written directly.
    let cached: Option<collabdesk::models::Document> = ctx
        .query_client()
        .get_query_data(&keys::document("d3"))
        .await;
    assert_eq!(cached.map(|d| d.name), Some("Notes".to_string()));

    // The list was invalidated, so this read goes back to the backend.
    ctx.documents().list(&query).await;

    let toast = toasts.try_recv().expect("success toast");
    assert_eq!(toast.level, ToastLevel::Success);
}

#[tokio::test]
async fn test_failed_mutation_leaves_cache_untouched() {
    let server = MockServer::start().await;
    mount_documents(&server, 1).await;
    Mock::given(method("POST"))
        .and(path("/documents"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"message": "name already taken"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (ctx, _) = test_context(&server);
    let mut toasts = ctx.notifier().subscribe();
    let query = DocumentQuery::default();
    let key = keys::document_list(&query);

    ctx.documents().list(&query).await;
    let before = ctx.query_client().get_raw(&key).await;

    let error = ctx
        .documents()
        .create(&new_document("Roadmap.md"))
        .await
        .expect_err("backend rejects the name");
    assert_eq!(error.kind(), ErrorKind::Validation);

    assert_eq!(ctx.query_client().get_raw(&key).await, before);
    // Still fresh: no second GET.
    ctx.documents().list(&query).await;

    let toast = toasts.try_recv().expect("error toast");
    assert_eq!(toast.level, ToastLevel::Error);
    assert_eq!(toast.message, "name already taken");
}

#[tokio::test]
async fn test_mutation_retries_once_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/folders/f1"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let (ctx, _) = test_context(&server);
    let error = ctx.folders().delete("f1").await.expect_err("always 503");
    assert_eq!(error.kind(), ErrorKind::Unknown);
}

#[tokio::test]
async fn test_reads_retry_three_times_then_report_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/workflows"))
        .respond_with(ResponseTemplate::new(500))
        .expect(4)
        .mount(&server)
        .await;

    let (ctx, _) = test_context(&server);
    let state = ctx.workflows().list().await;
    assert!(state.data.is_none());
    assert!(state.is_error());
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_not_found_reads_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/documents/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let (ctx, _) = test_context(&server);
    let state = ctx.documents().get("gone").await;
    assert_eq!(state.error.map(|e| e.kind()), Some(ErrorKind::NotFound));
}

#[tokio::test]
async fn test_delete_clears_selected_document() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/documents/d1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let (ctx, _) = test_context(&server);
    ctx.stores().documents.select_document(Some("d1".to_string()));
    ctx.documents().delete("d1").await.expect("delete");
    assert!(ctx.stores().documents.snapshot().selected_document_id.is_none());
}

#[tokio::test]
async fn test_team_view_joins_members_and_settings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/team/members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            member_json("m1", "owner"),
            member_json("m2", "viewer")
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/team/settings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"name": "Acme", "allowInvites": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (ctx, _) = test_context(&server);
    let view = ctx.team_view().await;
    assert_eq!(view.members.data_or_default().len(), 2);
    assert_eq!(view.settings.data.map(|s| s.name), Some("Acme".to_string()));
    assert!(!view.is_loading_members);
    assert!(!view.is_loading_settings);
}

#[tokio::test]
async fn test_settings_updates_leave_fresh_settings_behind() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/team/settings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"name": "Acme", "allowInvites": true})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/team/settings"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"name": "Acme Labs", "allowInvites": true})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/notifications/settings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"emailEnabled": true})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/notifications/settings"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"emailEnabled": false, "pushEnabled": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (ctx, _) = test_context(&server);
    assert_eq!(
        ctx.team().settings().await.data.map(|s| s.name),
        Some("Acme".to_string())
    );
    assert!(ctx.notifications().settings().await.data.expect("settings").email_enabled);

    ctx.team()
        .update_settings(&TeamSettingsUpdate {
            name: Some("Acme Labs".to_string()),
            ..Default::default()
        })
        .await
        .expect("team settings");
    ctx.notifications()
        .update_settings(&NotificationSettingsUpdate {
            email_enabled: Some(false),
            push_enabled: Some(true),
            ..Default::default()
        })
        .await
        .expect("notification settings");

    // Invalidated and then written through, so no second GET is made.
    let team = ctx.team().settings().await;
    assert!(!team.is_stale);
    assert_eq!(team.data.map(|s| s.name), Some("Acme Labs".to_string()));
    let notifications = ctx.notifications().settings().await;
    assert!(!notifications.is_stale);
    let settings = notifications.data.expect("settings");
    assert!(!settings.email_enabled);
    assert!(settings.push_enabled);
    assert!(!ctx.stores().notifications.snapshot().is_settings_open);
}

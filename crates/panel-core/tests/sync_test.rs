#![allow(clippy::unwrap_used)]
// Integration tests for `PanelClient` and `ServerSync` against a mock panel.

use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use panel_core::{
    ClientConfig, CoreError, CreateBackup, CronSpec, PanelClient, SaveSchedule, ServerStore,
    ServerSync, predicates,
};

const UUID: &str = "5a2f0c1e-0000-4000-8000-00000000abcd";

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ServerSync) {
    let server = MockServer::start().await;
    let mut config = ClientConfig::new(Url::parse(&server.uri()).unwrap());
    config.per_page = 25;
    let client = PanelClient::from_config(&config).unwrap();
    let sync = ServerSync::new(client, Arc::new(ServerStore::new()));
    (server, sync)
}

fn server_path(suffix: &str) -> String {
    format!("/api/client/servers/{UUID}/{suffix}")
}

fn file_entry(name: &str, is_file: bool, mime: &str) -> serde_json::Value {
    json!({
        "name": name,
        "mode": if is_file { "-rw-r--r--" } else { "drwxr-xr-x" },
        "mode_bits": if is_file { "644" } else { "755" },
        "size": 128,
        "file": is_file,
        "symlink": false,
        "mime": mime,
        "created": "2024-05-01T10:00:00Z",
        "modified": "2024-05-02T10:00:00Z"
    })
}

fn listing(entries: Vec<serde_json::Value>) -> serde_json::Value {
    let total = entries.len();
    json!({"entries": {"total": total, "per_page": 25, "page": 1, "data": entries}})
}

async fn mount_server(mock: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/api/client/servers/{UUID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "server",
            "attributes": {
                "identifier": "5a2f0c1e",
                "internal_id": 12,
                "uuid": UUID,
                "name": "Skyblock",
                "description": "",
                "limits": {"memory": 2048, "swap": 0, "disk": 0, "io": 500, "cpu": 0},
                "feature_limits": {"databases": 1, "allocations": 2, "backups": 3},
                "relationships": {
                    "allocations": {"object": "list", "data": [
                        {"object": "allocation", "attributes": {"id": 1, "ip": "10.1.0.2", "port": 25565, "is_default": true}}
                    ]}
                }
            }
        })))
        .mount(mock)
        .await;
}

const OTHER: &str = "00000000-0000-4000-8000-000000000000";

async fn mount_other_server(mock: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/api/client/servers/{OTHER}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attributes": {"identifier": "00000000", "uuid": OTHER, "name": "Lobby"}
        })))
        .mount(mock)
        .await;
}

fn schedule_input(id: Option<i64>, name: &str) -> SaveSchedule {
    SaveSchedule {
        id,
        name: name.into(),
        cron: CronSpec::default(),
        only_when_online: false,
        is_active: true,
    }
}

async fn loaded() -> (MockServer, ServerSync) {
    let (mock, sync) = setup().await;
    mount_server(&mock).await;
    assert!(sync.load_server(UUID).await.unwrap());
    (mock, sync)
}

// ── Server ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_load_server_populates_store() {
    let (_mock, sync) = loaded().await;

    let server = sync.store().server().server().unwrap();
    assert_eq!(server.name, "Skyblock");
    assert_eq!(server.description, None);
    assert_eq!(server.limits.disk, 0);
    assert_eq!(panel_core::size::limit_to_string(server.limits.disk), "Unlimited");
    assert_eq!(panel_core::size::limit_to_string(server.limits.memory), "2 GiB");
    assert!(server.variables.is_empty());
    assert_eq!(sync.store().server().primary_allocation().unwrap().port, 25565);
}

#[tokio::test]
async fn test_operations_need_a_server() {
    let (_mock, sync) = setup().await;
    let result = sync.refresh_stats().await;
    assert!(matches!(result, Err(CoreError::NoServerLoaded)));
}

#[tokio::test]
async fn test_switching_server_resets_slices() {
    let (mock, sync) = loaded().await;
    sync.store().files().set_browsing_directory("/world");
    mount_other_server(&mock).await;

    sync.load_server(OTHER).await.unwrap();
    assert_eq!(sync.store().server().uuid().as_deref(), Some(OTHER));
    assert_eq!(sync.store().files().browsing_directory(), "/");
}

#[tokio::test]
async fn test_refresh_stats() {
    let (mock, sync) = loaded().await;

    Mock::given(method("GET"))
        .and(path(server_path("resources")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "stats",
            "attributes": {
                "current_state": "running",
                "is_suspended": false,
                "resources": {"memory_bytes": 536_870_912, "cpu_absolute": 42.0, "disk_bytes": 1024,
                              "network_rx_bytes": 1, "network_tx_bytes": 2, "uptime": 3_600_000}
            }
        })))
        .mount(&mock)
        .await;

    assert!(sync.refresh_stats().await.unwrap());
    let stats = sync.store().stats().stats().unwrap();
    assert!(stats.status.is_running());
    assert_eq!(panel_core::size::bytes_to_string(stats.memory_usage_bytes, 2), "512 MiB");
}

#[tokio::test]
async fn test_refresh_allocations() {
    let (mock, sync) = loaded().await;

    Mock::given(method("GET"))
        .and(path(server_path("network/allocations")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [
                {"object": "allocation", "attributes": {"id": 1, "ip": "10.1.0.2", "port": 25565, "is_default": false}},
                {"object": "allocation", "attributes": {"id": 2, "ip": "10.1.0.2", "port": 25566, "is_default": true, "notes": "query"}}
            ]
        })))
        .mount(&mock)
        .await;

    sync.refresh_allocations().await.unwrap();
    let primary = sync.store().server().primary_allocation().unwrap();
    assert_eq!(primary.id, 2);
    assert_eq!(primary.notes.as_deref(), Some("query"));
}

// ── Files ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_browse_loads_listing() {
    let (mock, sync) = loaded().await;

    Mock::given(method("GET"))
        .and(path(server_path("files/list")))
        .and(query_param("directory", "/"))
        .and(query_param("per_page", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vec![
            file_entry("plugins", false, "inode/directory"),
            file_entry("server.properties", true, "text/plain"),
            file_entry("icon.png", true, "image/png"),
            file_entry("world.tar.gz", true, "application/gzip"),
        ])))
        .mount(&mock)
        .await;

    assert!(sync.browse("/", 1).await.unwrap());
    let state = sync.store().files().state();
    assert_eq!(state.browsing_directory, "/");
    assert_eq!(state.browsing_entries.pagination.total_items, 4);

    let editable: Vec<&str> = state
        .browsing_entries
        .iter()
        .filter(|f| predicates::is_editable(f))
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(editable, vec!["server.properties"]);

    let dirs: Vec<&str> = state
        .browsing_entries
        .iter()
        .filter(|f| predicates::is_directory(f))
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(dirs, vec!["plugins"]);
    assert!(predicates::is_archive_type(&state.browsing_entries.items[3]));
}

#[tokio::test]
async fn test_late_listing_is_discarded() {
    let (mock, sync) = loaded().await;

    Mock::given(method("GET"))
        .and(path(server_path("files/list")))
        .and(query_param("directory", "/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(listing(vec![file_entry("stale.txt", true, "text/plain")]))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock)
        .await;
    Mock::given(method("GET"))
        .and(path(server_path("files/list")))
        .and(query_param("directory", "/fast"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(listing(vec![file_entry("fresh.txt", true, "text/plain")])),
        )
        .mount(&mock)
        .await;

    let (slow, fast) = tokio::join!(sync.browse("/slow", 1), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        sync.browse("/fast", 1).await
    });

    assert!(!slow.unwrap());
    assert!(fast.unwrap());
    let state = sync.store().files().state();
    assert_eq!(state.browsing_directory, "/fast");
    assert_eq!(state.browsing_entries.items[0].name, "fresh.txt");
}

#[tokio::test]
async fn test_delete_files_updates_listing_and_selection() {
    let (mock, sync) = loaded().await;

    Mock::given(method("GET"))
        .and(path(server_path("files/list")))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vec![
            file_entry("a.log", true, "text/plain"),
            file_entry("b.log", true, "text/plain"),
        ])))
        .mount(&mock)
        .await;
    Mock::given(method("POST"))
        .and(path(server_path("files/delete")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock)
        .await;

    sync.browse("/logs", 1).await.unwrap();
    let files = sync.store().files();
    let first = files.state().browsing_entries.items[0].clone();
    files.add_selected_file(first);

    sync.delete_files(&["a.log".to_string()]).await.unwrap();
    let state = files.state();
    assert_eq!(state.browsing_entries.items.len(), 1);
    assert_eq!(state.browsing_entries.pagination.total_items, 1);
    assert!(state.selected_files.is_empty());
}

#[tokio::test]
async fn test_failed_browse_shows_new_directory_empty() {
    let (mock, sync) = loaded().await;

    Mock::given(method("GET"))
        .and(path(server_path("files/list")))
        .and(query_param("directory", "/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vec![file_entry(
            "server.properties",
            true,
            "text/plain",
        )])))
        .mount(&mock)
        .await;
    Mock::given(method("GET"))
        .and(path(server_path("files/list")))
        .and(query_param("directory", "/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock)
        .await;

    assert!(sync.browse("/", 1).await.unwrap());
    let err = sync.browse("/broken", 1).await.unwrap_err();
    assert_eq!(err.as_api().and_then(panel_api::Error::status), Some(500));

    let state = sync.store().files().state();
    assert_eq!(state.browsing_directory, "/broken");
    assert!(state.browsing_entries.is_empty());
    assert_eq!(state.browsing_entries.pagination.total_items, 0);
}

#[tokio::test]
async fn test_delete_result_ignored_after_navigation() {
    let (mock, sync) = loaded().await;

    Mock::given(method("GET"))
        .and(path(server_path("files/list")))
        .and(query_param("directory", "/a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vec![
            file_entry("config.yml", true, "text/plain"),
            file_entry("x.txt", true, "text/plain"),
        ])))
        .mount(&mock)
        .await;
    Mock::given(method("GET"))
        .and(path(server_path("files/list")))
        .and(query_param("directory", "/b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(vec![
            file_entry("config.yml", true, "text/plain"),
            file_entry("y.txt", true, "text/plain"),
        ])))
        .mount(&mock)
        .await;
    Mock::given(method("POST"))
        .and(path(server_path("files/delete")))
        .respond_with(ResponseTemplate::new(204).set_delay(Duration::from_millis(300)))
        .expect(1)
        .mount(&mock)
        .await;

    sync.browse("/a", 1).await.unwrap();
    let delete_paths = ["config.yml".to_string()];
    let (deleted, browsed) = tokio::join!(sync.delete_files(&delete_paths), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        sync.browse("/b", 1).await
    });
    deleted.unwrap();
    assert!(browsed.unwrap());

    let state = sync.store().files().state();
    assert_eq!(state.browsing_directory, "/b");
    let names: Vec<&str> = state.browsing_entries.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["config.yml", "y.txt"]);
    assert_eq!(state.browsing_entries.pagination.total_items, 2);
}

#[tokio::test]
async fn test_download_url() {
    let (mock, sync) = loaded().await;

    Mock::given(method("GET"))
        .and(path(server_path("files/download")))
        .and(query_param("files", "logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "signed_url",
            "attributes": {"url": "https://node/download/file?token=t"}
        })))
        .mount(&mock)
        .await;

    let url = sync
        .client()
        .download_file(UUID, "/", &["logs".to_string()], true)
        .await
        .unwrap();
    assert_eq!(url.url, "https://node/download/file?token=t");
}

// ── Backups ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_backup_lifecycle() {
    let (mock, sync) = loaded().await;

    Mock::given(method("GET"))
        .and(path(server_path("backups")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{"object": "backup", "attributes": {
                "uuid": "b-old", "name": "weekly", "is_successful": true, "bytes": 1024,
                "created_at": "2024-05-01T00:00:00Z", "completed_at": "2024-05-01T00:01:00Z"
            }}],
            "meta": {"pagination": {"total": 1, "count": 1, "per_page": 20, "current_page": 1, "total_pages": 1}}
        })))
        .mount(&mock)
        .await;
    Mock::given(method("POST"))
        .and(path(server_path("backups")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "backup",
            "attributes": {"uuid": "b-new", "name": "manual", "completed_at": null}
        })))
        .mount(&mock)
        .await;
    Mock::given(method("DELETE"))
        .and(path(server_path("backups/b-old")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock)
        .await;

    assert!(sync.refresh_backups(1).await.unwrap());
    let created = sync
        .create_backup(&CreateBackup {
            name: Some("manual".into()),
            ..CreateBackup::default()
        })
        .await
        .unwrap()
        .unwrap();
    assert!(created.is_in_progress());

    let page = sync.store().backups().backups();
    assert_eq!(page.pagination.total_items, 2);
    assert_eq!(page.items[1].uuid, "b-new");

    sync.delete_backup("b-old").await.unwrap();
    let page = sync.store().backups().backups();
    assert_eq!(page.pagination.total_items, 1);
    assert_eq!(page.items[0].uuid, "b-new");
}

#[tokio::test]
async fn test_backup_created_after_switch_is_not_added() {
    let (mock, sync) = loaded().await;
    mount_other_server(&mock).await;

    Mock::given(method("POST"))
        .and(path(server_path("backups")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "object": "backup",
                    "attributes": {"uuid": "b-late", "name": "late", "completed_at": null}
                }))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock)
        .await;

    let backup_input = CreateBackup::default();
    let (created, switched) = tokio::join!(sync.create_backup(&backup_input), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        sync.load_server(OTHER).await
    });

    assert_eq!(created.unwrap().unwrap().uuid, "b-late");
    assert!(switched.unwrap());
    assert_eq!(sync.store().server().uuid().as_deref(), Some(OTHER));
    assert!(sync.store().backups().backups().is_empty());
}

#[tokio::test]
async fn test_create_backup_without_body_refetches_page() {
    let (mock, sync) = loaded().await;

    Mock::given(method("POST"))
        .and(path(server_path("backups")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock)
        .await;
    Mock::given(method("GET"))
        .and(path(server_path("backups")))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{"object": "backup", "attributes": {"uuid": "b-1", "name": "manual"}}]
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let created = sync.create_backup(&CreateBackup::default()).await.unwrap();
    assert!(created.is_none());
    let page = sync.store().backups().backups();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].uuid, "b-1");
}

// ── Schedules ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_empty_save_response_refetches_schedules() {
    let (mock, sync) = loaded().await;

    Mock::given(method("GET"))
        .and(path(server_path("schedules")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{"object": "server_schedule", "attributes": {"id": 4, "name": "old"}}]
        })))
        .up_to_n_times(1)
        .mount(&mock)
        .await;
    Mock::given(method("GET"))
        .and(path(server_path("schedules")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{"object": "server_schedule", "attributes": {"id": 4, "name": "renamed"}}]
        })))
        .mount(&mock)
        .await;
    Mock::given(method("POST"))
        .and(path(server_path("schedules/4")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock)
        .await;

    assert!(sync.refresh_schedules().await.unwrap());
    let saved = sync
        .save_schedule(&schedule_input(Some(4), "renamed"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(saved.id, 4);
    assert_eq!(saved.name, "renamed");

    let schedules = sync.store().schedules().schedules();
    assert_eq!(schedules.len(), 1);
    assert!(schedules.iter().all(|s| s.id != 0));
}

#[tokio::test]
async fn test_client_unwraps_data_and_bare_documents() {
    let (mock, sync) = setup().await;

    Mock::given(method("GET"))
        .and(path(server_path("schedules/5")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "object": "server_schedule",
                "attributes": {"id": 5, "name": "Restart"},
                "relationships": {"tasks": {"object": "list", "data": [
                    {"object": "schedule_task", "attributes": {"id": 2, "sequence_id": 2, "action": "power"}},
                    {"object": "schedule_task", "attributes": {"id": 1, "sequence_id": 1, "action": "command"}}
                ]}}
            }
        })))
        .mount(&mock)
        .await;
    Mock::given(method("GET"))
        .and(path(server_path("resources")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_state": "starting",
            "resources": {"memory_bytes": 1024, "uptime": 5}
        })))
        .mount(&mock)
        .await;

    let schedule = sync.client().get_schedule(UUID, 5).await.unwrap();
    assert_eq!(schedule.id, 5);
    let sequence: Vec<i64> = schedule.tasks.iter().map(|t| t.id).collect();
    assert_eq!(sequence, vec![1, 2]);

    let stats = sync.client().get_server_stats(UUID).await.unwrap();
    assert_eq!(stats.memory_usage_bytes, 1024);
    assert_eq!(stats.uptime_ms, 5);
}

#[tokio::test]
async fn test_schedule_saved_after_switch_is_not_added() {
    let (mock, sync) = loaded().await;
    mount_other_server(&mock).await;

    Mock::given(method("POST"))
        .and(path(server_path("schedules")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "object": "server_schedule",
                    "attributes": {"id": 11, "name": "late"}
                }))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock)
        .await;

    let late_schedule = schedule_input(None, "late");
    let (saved, switched) = tokio::join!(sync.save_schedule(&late_schedule), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        sync.load_server(OTHER).await
    });

    assert_eq!(saved.unwrap().unwrap().id, 11);
    assert!(switched.unwrap());
    assert!(sync.store().schedules().schedules().is_empty());
}

#[tokio::test]
async fn test_schedule_save_and_delete() {
    let (mock, sync) = loaded().await;

    Mock::given(method("GET"))
        .and(path(server_path("schedules")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [
                {"object": "server_schedule", "attributes": {"id": 1, "name": "a"}},
                {"object": "server_schedule", "attributes": {"id": 2, "name": "b"}}
            ]
        })))
        .mount(&mock)
        .await;
    Mock::given(method("POST"))
        .and(path(server_path("schedules/1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "server_schedule",
            "attributes": {"id": 1, "name": "a-renamed", "cron": {"minute": "0", "hour": "3", "day_of_month": "*", "month": "*", "day_of_week": "*"}}
        })))
        .mount(&mock)
        .await;
    Mock::given(method("DELETE"))
        .and(path(server_path("schedules/2")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock)
        .await;

    assert!(sync.refresh_schedules().await.unwrap());

    let saved = sync
        .save_schedule(&SaveSchedule {
            id: Some(1),
            name: "a-renamed".into(),
            cron: CronSpec {
                minute: "0".into(),
                hour: "3".into(),
                ..CronSpec::default()
            },
            only_when_online: false,
            is_active: true,
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(saved.cron.to_string(), "0 3 * * *");

    let names: Vec<String> = sync
        .store()
        .schedules()
        .schedules()
        .iter()
        .map(|s| s.name.clone())
        .collect();
    assert_eq!(names, vec!["a-renamed".to_string(), "b".to_string()]);

    sync.delete_schedule(2).await.unwrap();
    assert_eq!(sync.store().schedules().schedules().len(), 1);
}

// ── Errors and subscriptions ────────────────────────────────────────

#[tokio::test]
async fn test_transport_error_passes_through() {
    let (mock, sync) = loaded().await;

    Mock::given(method("DELETE"))
        .and(path(server_path("schedules/7")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"code": "NotFoundHttpException", "detail": "The requested resource does not exist on this server."}]
        })))
        .mount(&mock)
        .await;

    let err = sync.delete_schedule(7).await.unwrap_err();
    let api = err.as_api().unwrap();
    assert!(api.is_not_found());
    assert_eq!(
        api.to_string(),
        "Panel API error (HTTP 404): The requested resource does not exist on this server."
    );
}

#[tokio::test]
async fn test_databases_listing() {
    let (mock, sync) = loaded().await;

    Mock::given(method("GET"))
        .and(path(server_path("databases")))
        .and(query_param("include", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [{"object": "server_database", "attributes": {
                "id": "d1", "name": "s12_data", "username": "u12_x",
                "host": {"address": "db.internal", "port": 3306},
                "connections_from": "%",
                "relationships": {"password": {"object": "database_password", "attributes": {"password": "pw"}}}
            }}]
        })))
        .mount(&mock)
        .await;

    let dbs = sync.client().list_databases(UUID).await.unwrap();
    assert_eq!(dbs.pagination.total_items, 1);
    assert_eq!(dbs.items[0].connection_string, "db.internal:3306");
    assert_eq!(dbs.items[0].password.as_deref(), Some("pw"));
}

#[tokio::test]
async fn test_stats_stream_yields_updates() {
    let (_mock, sync) = loaded().await;
    let mut stream = sync.store().stats().subscribe().into_stream();

    assert_eq!(stream.next().await, Some(None));

    let stats = panel_core::ServerStats {
        uptime_ms: 10,
        ..panel_core::ServerStats::default()
    };
    sync.store().stats().set_stats(stats);
    assert_eq!(stream.next().await, Some(Some(stats)));
}

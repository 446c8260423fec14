//! Integration tests for the mirroring entry client.

use chrono::{TimeZone, Utc};

use entrybook::client::{ClientError, EntryClient, Theme, ThemeStore};
use entrybook::models::EntryPayload;

mod common;
use common::{spawn_server, TestServer};

fn client_for(server: &TestServer) -> EntryClient {
    let theme_path = server.dir.path().join("theme");
    EntryClient::new(&server.base_url, ThemeStore::new(theme_path))
}

fn payload(title: &str) -> EntryPayload {
    EntryPayload {
        title: title.to_string(),
        description: format!("{title} description"),
        created_at: None,
        scheduled_date: None,
    }
}

#[tokio::test]
async fn init_populates_mirror_from_server() {
    let server = spawn_server().await;

    let mut writer = client_for(&server);
    writer.init().await.unwrap();
    writer.save_entry(&payload("first")).await.unwrap();
    writer.save_entry(&payload("second")).await.unwrap();

    let mut reader = client_for(&server);
    reader.init().await.unwrap();

    assert_eq!(reader.entries().len(), 2);
    assert_eq!(reader.entries(), writer.entries());
}

#[tokio::test]
async fn save_entry_appends_the_confirmed_entry_once() {
    let server = spawn_server().await;
    let mut client = client_for(&server);
    client.init().await.unwrap();

    client.save_entry(&payload("only")).await.unwrap();

    let matching: Vec<_> = client
        .entries()
        .iter()
        .filter(|e| e.title == "only")
        .collect();
    assert_eq!(matching.len(), 1);
    // Id comes from the server, not the payload.
    assert!(!matching[0].id.is_empty());
}

#[tokio::test]
async fn delete_entry_removes_exactly_one_by_id() {
    let server = spawn_server().await;
    let mut client = client_for(&server);
    client.init().await.unwrap();

    for title in ["a", "b", "c"] {
        client.save_entry(&payload(title)).await.unwrap();
    }
    let victim = client.entries()[1].id.clone();

    client.delete_entry(&victim).await.unwrap();

    assert_eq!(client.entries().len(), 2);
    assert!(client.entries().iter().all(|e| e.id != victim));

    // Server agrees after a full reload.
    let mut reader = client_for(&server);
    reader.init().await.unwrap();
    assert_eq!(reader.entries(), client.entries());
}

#[tokio::test]
async fn update_entry_keeps_the_locally_supplied_copy() {
    let server = spawn_server().await;
    let mut client = client_for(&server);
    client.init().await.unwrap();

    let mut scheduled_payload = payload("meeting");
    scheduled_payload.scheduled_date = Some(Utc.with_ymd_and_hms(2024, 7, 4, 10, 0, 0).unwrap());
    client.save_entry(&scheduled_payload).await.unwrap();

    let mut local = client.entries()[0].clone();
    local.title = "meeting (moved)".to_string();
    local.scheduled_date = None;
    let id = local.id.clone();

    client.update_entry(&id, local.clone()).await.unwrap();

    // Mirror holds the pre-request object, not the server response.
    assert_eq!(client.entries()[0], local);

    // Reload converges on server state.
    let mut reader = client_for(&server);
    reader.init().await.unwrap();
    assert_eq!(reader.entries()[0].title, "meeting (moved)");
    assert_eq!(reader.entries()[0].scheduled_date, None);
}

#[tokio::test]
async fn failed_mutations_leave_the_mirror_unchanged() {
    let server = spawn_server().await;
    let mut client = client_for(&server);
    client.init().await.unwrap();
    client.save_entry(&payload("keep me")).await.unwrap();
    let before = client.entries().to_vec();

    let err = client.delete_entry("not-an-id").await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 500, .. }));
    assert_eq!(client.entries(), before);

    let stray = before[0].clone();
    let err = client
        .update_entry("also-not-an-id", stray)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 500, .. }));
    assert_eq!(client.entries(), before);
}

#[tokio::test]
async fn theme_defaults_to_light_and_toggle_persists() {
    let server = spawn_server().await;

    let mut client = client_for(&server);
    client.init().await.unwrap();
    assert_eq!(client.theme(), Theme::Light);

    assert_eq!(client.toggle_theme(), Theme::Dark);
    assert_eq!(client.theme(), Theme::Dark);

    // A fresh client over the same flag file picks the persisted theme up.
    let mut reloaded = client_for(&server);
    reloaded.init().await.unwrap();
    assert_eq!(reloaded.theme(), Theme::Dark);
}

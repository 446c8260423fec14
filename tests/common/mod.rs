use tempfile::TempDir;

use entrybook::handlers::{router, AppState};

pub struct TestServer {
    pub base_url: String,
    pub dir: TempDir,
}

/// Bind the entry store on an ephemeral port over a throwaway database.
/// The TempDir keeps the database (and any per-test state files) alive for
/// the duration of the test.
pub async fn spawn_server() -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("entries.db");
    entrybook::database::init_database(&db_path).unwrap();

    let app = router(AppState::new(&db_path));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{addr}"),
        dir,
    }
}

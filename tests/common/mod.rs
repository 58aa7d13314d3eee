#![allow(dead_code)]

use axum_test::TestServer;
use shorty::infrastructure::persistence::JsonFileRedirectRepository;
use shorty::routes::app_router;
use shorty::state::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub fn redir_file(dir: &TempDir) -> PathBuf {
    dir.path().join("redirs.json")
}

pub async fn create_test_state(dir: &TempDir) -> AppState {
    let repository = JsonFileRedirectRepository::open(redir_file(dir))
        .await
        .unwrap();
    AppState::new(Arc::new(repository))
}

pub async fn create_test_server(dir: &TempDir) -> TestServer {
    let state = create_test_state(dir).await;
    TestServer::new(app_router(state)).unwrap()
}

pub fn write_redirects(dir: &TempDir, contents: &str) {
    std::fs::write(redir_file(dir), contents).unwrap();
}

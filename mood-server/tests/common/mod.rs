//! Shared test utilities for mood-server integration tests

use std::net::SocketAddr;
use std::sync::Arc;

use mood_server::{AppState, MoodServer, ServerConfig};
use tempfile::TempDir;
use tokio::net::TcpListener;

/// A running server with its own temporary feedback log
#[allow(dead_code)]
pub struct TestServer {
    pub dir: TempDir,
    pub state: Arc<AppState>,
    pub addr: SocketAddr,
}

impl TestServer {
    #[allow(dead_code)]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Creates a test server over an empty log in a fresh temp dir
#[allow(dead_code)]
pub async fn create_test_server() -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("feedback_data.csv");
    let state = Arc::new(AppState::new(&data_file));

    let server = MoodServer::with_state(
        ServerConfig::default().with_data_file(&data_file),
        Arc::clone(&state),
    );
    let addr = spawn_server(server).await;

    TestServer { dir, state, addr }
}

/// Spawns server in background task, returns bound address
async fn spawn_server(server: MoodServer) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = server.run_with_listener(listener).await;
    });

    // Brief delay to ensure server is accepting connections
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    addr
}

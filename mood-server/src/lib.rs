//! mood-server - HTTP server for the mood feedback analyzer
//!
//! Serves the feedback form, the stored-feedback view with its CSV download,
//! and a small JSON API. All state lives in a single [`mood_core::FeedbackService`].

mod error;
pub mod http;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

pub use error::{ApiError, ErrorResponse, ServerError};
pub use http::create_router;
pub use state::AppState;

/// Default port for the mood server
pub const DEFAULT_PORT: u16 = 8501;
/// Default host for the mood server
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// The main mood server
pub struct MoodServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl MoodServer {
    /// Create a new server over the log named in `config`
    pub fn new(config: ServerConfig) -> Self {
        let state = Arc::new(AppState::new(config.data_file.clone()));
        Self { config, state }
    }

    /// Create a server with custom state (for testing)
    pub fn with_state(config: ServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// Get the server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the shared application state
    pub fn state(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Run the server, binding to the configured address
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::Bind {
                addr: addr.clone(),
                source: e,
            })?;

        self.run_with_listener(listener).await
    }

    /// Run the server on an already-bound listener
    pub async fn run_with_listener(self, listener: TcpListener) -> Result<(), ServerError> {
        let local = listener
            .local_addr()
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        tracing::info!(
            data_file = %self.config.data_file.display(),
            "mood server listening on http://{}",
            local
        );

        let router = create_router(self.state);
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))?;

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Feedback log location
    pub data_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_file: PathBuf::from(mood_core::DOWNLOAD_FILE_NAME),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with the specified host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    /// Returns the socket address string (e.g., "127.0.0.1:8501")
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

//! Shared application state for the mood server

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use mood_core::{FeedbackService, FeedbackStore};
use tokio::task::JoinError;

/// Shared application state accessible by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Feedback pipeline over the CSV log
    pub feedback: Arc<FeedbackService>,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state backed by the log at `data_file`
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self::with_service(FeedbackService::new(FeedbackStore::open(data_file)))
    }

    /// Create state around an existing service (for testing)
    pub fn with_service(feedback: FeedbackService) -> Self {
        Self {
            feedback: Arc::new(feedback),
            started_at: Utc::now(),
        }
    }

    /// Run a feedback operation on the blocking thread pool.
    ///
    /// The store reads and rewrites its file synchronously and appends hold a
    /// lock, so handlers never call the service on a runtime worker.
    pub async fn run_blocking<F, T>(&self, op: F) -> Result<T, JoinError>
    where
        F: FnOnce(&FeedbackService) -> T + Send + 'static,
        T: Send + 'static,
    {
        let feedback = Arc::clone(&self.feedback);
        tokio::task::spawn_blocking(move || op(&feedback)).await
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_new() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(dir.path().join("feedback_data.csv"));
        assert!(state.uptime_seconds() >= 0);
        assert!(state.feedback.load_all().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_blocking_leaves_runtime_free() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(dir.path().join("feedback_data.csv"));

        // On a current-thread runtime the sender only runs if the operation
        // is off the runtime thread.
        let (tx, rx) = std::sync::mpsc::channel();
        let sender = tokio::spawn(async move { tx.send(()).unwrap() });
        let received = state
            .run_blocking(move |_| rx.recv_timeout(std::time::Duration::from_secs(5)).is_ok())
            .await
            .unwrap();

        assert!(received);
        sender.await.unwrap();
    }

    #[tokio::test]
    async fn test_run_blocking_reaches_the_service() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(dir.path().join("feedback_data.csv"));

        let total = state
            .run_blocking(|feedback| {
                feedback
                    .submit(mood_core::Submission::new("Great labs"))
                    .unwrap();
                feedback.load_all().unwrap().len()
            })
            .await
            .unwrap();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_app_state_clones_share_service() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(dir.path().join("feedback_data.csv"));
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.feedback, &clone.feedback));
    }
}

//! REST API handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use mood_core::{
    Analysis, CSV_MIME, DOWNLOAD_FILE_NAME, ExampleOutcome, FeedbackRecord, SentimentSummary,
    Submission,
};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the server
    pub status: String,
    /// Server version
    pub version: String,
    /// Seconds since server started
    pub uptime_seconds: i64,
}

/// GET /api/health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Response for listing stored feedback
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackListResponse {
    pub total: usize,
    pub records: Vec<FeedbackRecord>,
}

/// POST /api/feedback - score, label and store a submission
pub async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Result<(StatusCode, Json<Analysis>), ApiError> {
    let Json(submission) = payload?;
    let analysis = state
        .run_blocking(move |feedback| feedback.submit(submission))
        .await??;
    Ok((StatusCode::CREATED, Json(analysis)))
}

/// GET /api/feedback - all stored feedback in submission order
pub async fn list_feedback(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FeedbackListResponse>, ApiError> {
    let records = state.run_blocking(|feedback| feedback.load_all()).await??;
    Ok(Json(FeedbackListResponse {
        total: records.len(),
        records,
    }))
}

/// GET /api/feedback/summary - counts per sentiment label
pub async fn feedback_summary(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SentimentSummary>, ApiError> {
    let summary = state.run_blocking(|feedback| feedback.summary()).await??;
    Ok(Json(summary))
}

/// GET /api/examples - worked examples scored by the live scorer
pub async fn examples(State(state): State<Arc<AppState>>) -> Json<Vec<ExampleOutcome>> {
    Json(state.feedback.examples())
}

/// GET /feedback/download - the log as a CSV attachment
pub async fn download_csv(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let body = state.run_blocking(|feedback| feedback.export_csv()).await??;
    Ok((
        [
            (header::CONTENT_TYPE, CSV_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME),
            ),
        ],
        body,
    ))
}

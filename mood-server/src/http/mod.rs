//! HTTP server module

mod api;
mod pages;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

pub use api::{FeedbackListResponse, HealthResponse};
pub use pages::Page;

/// Create the HTTP router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api/health", get(api::health))
        .route(
            "/api/feedback",
            get(api::list_feedback).post(api::submit_feedback),
        )
        .route("/api/feedback/summary", get(api::feedback_summary))
        .route("/api/examples", get(api::examples))
        .layer(CorsLayer::permissive());

    Router::new()
        .route(Page::Home.path(), get(pages::home))
        .route(
            Page::Analyze.path(),
            get(pages::analyze_form).post(pages::analyze_submit),
        )
        .route(Page::ViewAll.path(), get(pages::view_all))
        .route("/feedback/download", get(api::download_csv))
        .merge(api)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

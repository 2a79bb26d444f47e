pub mod api;
pub mod config;
pub mod errors;
pub mod monitoring;

use activities_core::ActivityCatalog;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ActivityCatalog>,
    pub monitoring: Option<monitoring::MonitoringLayer>,
}

impl AppState {
    pub fn new(catalog: Arc<ActivityCatalog>) -> Self {
        Self {
            catalog,
            monitoring: None,
        }
    }

    pub fn with_monitoring(mut self, monitoring: monitoring::MonitoringLayer) -> Self {
        self.monitoring = Some(monitoring);
        self
    }
}

pub fn build_router(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/activities", get(api::list_activities))
        .route("/activities/:activity_name/signup", post(api::signup))
        .route("/activities/:activity_name/unregister", post(api::unregister))
        .route("/health", get(api::health))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use crate::{errors::ServerResult, AppState};
use activities_core::CatalogSnapshot;
use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const INDEX_PAGE: &str = "/static/index.html";

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PAGE)
}

pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Json<CatalogSnapshot> {
    Json(state.catalog.get_all())
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> ServerResult<Json<MessageResponse>> {
    if let Err(e) = state.catalog.signup(&activity_name, &query.email) {
        if let Some(ref monitoring) = state.monitoring {
            monitoring.log_rejected(e.to_string()).await;
        }
        return Err(e.into());
    }

    tracing::info!("Signed up {} for {}", query.email, activity_name);
    if let Some(ref monitoring) = state.monitoring {
        monitoring.log_signed_up(&activity_name, &query.email).await;
    }

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> ServerResult<Json<MessageResponse>> {
    if let Err(e) = state.catalog.unregister(&activity_name, &query.email) {
        if let Some(ref monitoring) = state.monitoring {
            monitoring.log_rejected(e.to_string()).await;
        }
        return Err(e.into());
    }

    tracing::info!("Removed {} from {}", query.email, activity_name);
    if let Some(ref monitoring) = state.monitoring {
        monitoring.log_unregistered(&activity_name, &query.email).await;
    }

    Ok(Json(MessageResponse {
        message: format!("Removed {} from {}", query.email, activity_name),
    }))
}

pub async fn health() -> &'static str {
    "OK"
}

use activities_core::CatalogError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Catalog(CatalogError::ActivityNotFound(_)) => StatusCode::NOT_FOUND,
            ServerError::Catalog(CatalogError::AlreadyRegistered { .. })
            | ServerError::Catalog(CatalogError::NotRegistered { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller in the `detail` field.
    pub fn detail(&self) -> String {
        match self {
            ServerError::Catalog(CatalogError::ActivityNotFound(_)) => {
                "Activity not found".to_string()
            }
            ServerError::Catalog(CatalogError::AlreadyRegistered { .. }) => {
                "Student is already signed up".to_string()
            }
            ServerError::Catalog(CatalogError::NotRegistered { .. }) => {
                "Student is not registered for this activity".to_string()
            }
            _ => "Unexpected Error".to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        #[derive(serde::Serialize)]
        struct ErrorResponse {
            detail: String,
        }

        match self {
            ServerError::Catalog(ref e) => warn!("Rejected request: {}", e),
            ref other => error!("{}", other),
        }

        let status = self.status();
        let detail = self.detail();
        (status, axum::Json(ErrorResponse { detail })).into_response()
    }
}

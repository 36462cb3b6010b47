use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::scorer::AnalysisError;
use crate::reddit_client::FetchError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant surfaces to clients as `{ "error": message }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Analysis(AnalysisError::EmptyData) => StatusCode::NOT_FOUND,
            AppError::Fetch(e) => match e {
                FetchError::InvalidUsername(_) => StatusCode::BAD_REQUEST,
                FetchError::UserNotFound(_) => StatusCode::NOT_FOUND,
                FetchError::Forbidden(_) => StatusCode::FORBIDDEN,
                FetchError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                FetchError::Authentication(_)
                | FetchError::Api { .. }
                | FetchError::Http(_)
                | FetchError::Parse(_) => StatusCode::BAD_GATEWAY,
            },
            AppError::Template(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the user. Upstream fetch failures keep their message;
    /// internal failures are logged and replaced with a generic one.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                "An internal server error occurred".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
            AppError::Fetch(e) => {
                if self.status().is_server_error() {
                    tracing::error!("Fetch error: {e}");
                } else {
                    tracing::warn!("Fetch error: {e}");
                }
                e.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.public_message() }));
        (status, body).into_response()
    }
}

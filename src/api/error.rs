//! HTTP Error Types
//!
//! Defines error types for the HTTP layer and their conversion to
//! responses. Errors are rendered as a small HTML page since the only
//! client is a browser.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use thiserror::Error;

use crate::ui::document;

/// HTTP error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Storage layer error
    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            ApiError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %code,
            error_message = %self,
            "Request failed"
        );

        let body = document(html! {
            h4 style="color: red" { (self.to_string()) }
            p class="text-secondary" { "Request ID: " (request_id) }
        });

        (status, Html(body.into_string())).into_response()
    }
}

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

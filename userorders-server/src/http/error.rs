//! API error types with IntoResponse
//!
//! Every error body is `{"message": ...}`. Only two statuses exist: 404 when a
//! point operation matched nothing, 500 for everything else. Store failures
//! pass their detail through unchanged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Missing field or unreadable body (500, like any other failure)
    Validation(ValidationError),

    /// Zero rows matched a point operation (404)
    NotFound { resource: &'static str },

    /// Anything the store reported (500, logged)
    Store(StoreError),
}

impl ApiError {
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::Store(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Store(e) = &self {
            tracing::error!(error = %e, "store error");
        }

        let body = json!({ "message": self.message() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

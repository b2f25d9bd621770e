//! # HTTP API Errors
//!
//! Every error leaves the server as `{ "message": ... }` with a status code
//! naming its class. Internal faults are logged and replaced with a generic
//! message so no diagnostic detail reaches the caller.

use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::registry::RegistryError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Message returned for every internal fault
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

/// Message returned for bodies that are not valid JSON objects
pub const MALFORMED_BODY_MESSAGE: &str = "Malformed JSON body";

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Error raised by the registry
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Request body claimed to be JSON but could not be decoded
    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    /// No route matches the request
    #[error("Cannot {method} {path}")]
    RouteNotFound { method: Method, path: String },

    /// Unexpected fault outside the registry
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Registry(RegistryError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,

            ApiError::Registry(RegistryError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,

            ApiError::Registry(RegistryError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message exposed to the caller
    pub fn public_message(&self) -> String {
        match self {
            ApiError::MalformedBody(_) => MALFORMED_BODY_MESSAGE.to_string(),
            err if err.status_code().is_server_error() => INTERNAL_ERROR_MESSAGE.to_string(),
            err => err.to_string(),
        }
    }
}

/// Body of every error response (and of the delete confirmation)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = Json(MessageResponse::new(self.public_message()));
        (status, body).into_response()
    }
}

/// Fallback handler for requests no route accepts
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method,
        path: uri.path().to_string(),
    }
}

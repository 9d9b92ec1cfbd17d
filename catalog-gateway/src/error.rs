//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::CoreError;
use serde::{Deserialize, Serialize};

/// Errors that can occur during gateway request handling.
///
/// Every variant carries the human-readable message placed in the response
/// body.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A path parameter or request body could not be decoded, or a required
    /// field is missing.
    #[error("{0}")]
    BadRequest(String),

    /// The addressed record or route does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Deliberate server-side failure.
    #[error("{0}")]
    Internal(String),

    /// Deliberate transient failure.
    #[error("{0}")]
    ServiceUnavailable(String),
}

impl GatewayError {
    /// HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<CoreError> for GatewayError {
    fn from(err: CoreError) -> Self {
        match err {
            not_found @ CoreError::NotFound { .. } => GatewayError::NotFound(not_found.to_string()),
            CoreError::Validation(msg) => GatewayError::BadRequest(msg),
            other => GatewayError::Internal(other.to_string()),
        }
    }
}

/// JSON body sent with every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Canonical reason phrase of the status, e.g. `"Not Found"`.
    pub error: String,
    pub code: u16,
    pub message: String,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(code = status.as_u16(), error = %self, "request failed");
        }
        let body = ErrorBody {
            error: status.canonical_reason().unwrap_or_default().to_owned(),
            code: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

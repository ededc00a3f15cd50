//! Error types for the roster HTTP API.
//!
//! [`ApiError`] unifies request-decoding failures and facade outcomes into
//! one enum that converts into an Axum response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body has the same shape:
//!
//! ```json
//! {"error": "conflict", "message": "consistency violation: ..."}
//! ```
//!
//! Store failures are logged with full detail and rendered with a generic
//! message so internals never reach the client.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::ServiceError;

/// Errors that can occur in the roster API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be decoded.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The route or addressed resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The service facade rejected or failed the operation.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ApiError {
    /// The HTTP status and machine-readable code of this error.
    pub const fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) | Self::Service(ServiceError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "bad_request")
            }
            Self::NotFound(_) | Self::Service(ServiceError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "not_found")
            }
            Self::Service(ServiceError::Consistency(_)) => (StatusCode::CONFLICT, "conflict"),
            Self::Service(ServiceError::Timeout(_)) => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
            Self::Service(ServiceError::Store(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = if status.is_server_error() && status != StatusCode::GATEWAY_TIMEOUT {
            tracing::error!(error = %self, status = status.as_u16(), "Unexpected HTTP error");
            String::from("internal error")
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "HTTP error");
            match self {
                Self::BadRequest(msg) | Self::NotFound(msg) => msg,
                Self::Service(
                    ServiceError::Validation(msg)
                    | ServiceError::NotFound(msg)
                    | ServiceError::Consistency(msg),
                ) => msg,
                Self::Service(other) => other.to_string(),
            }
        };

        let body = serde_json::json!({
            "error": code,
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use roster_core::DbError;

    use super::*;

    async fn body_json(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn consistency_is_conflict() {
        let (status, body) =
            body_json(ServiceError::Consistency("swap rejected".to_owned()).into()).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "conflict");
        assert_eq!(body["message"], "swap rejected");
    }

    #[tokio::test]
    async fn timeout_is_gateway_timeout() {
        let (status, body) =
            body_json(ServiceError::Timeout(Duration::from_millis(5)).into()).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body["error"], "timeout");
    }

    #[tokio::test]
    async fn store_failure_detail_is_hidden() {
        let err = ServiceError::Store(DbError::Config("pool exhausted".to_owned()));
        let (status, body) = body_json(err.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "internal error");
        assert!(!body.to_string().contains("pool exhausted"));
    }
}

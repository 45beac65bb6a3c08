use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::DomainError;
use service::errors::ServiceError;
use tracing::error;

/// Boundary error: every failure leaving the API is one of these, rendered as
/// `{"error": "<message>"}` with a deterministic status code.
#[derive(Debug)]
pub enum ApiError {
    /// Request body was not parseable JSON; orchestration never ran.
    MalformedBody(String),
    /// Structurally invalid input: null payload, empty identifier.
    InvalidData(String),
    NotFound(String),
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e @ DomainError::InvalidData) => Self::InvalidData(e.to_string()),
            ServiceError::Domain(e @ DomainError::NotFound) => Self::NotFound(e.to_string()),
            ServiceError::Storage(msg) => Self::Internal(format!("storage failure: {}", msg)),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            Self::MalformedBody(msg) | Self::InvalidData(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        if status.is_server_error() {
            error!(error = %msg, "request failed");
        }
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_deterministic_statuses() {
        let cases = [
            (
                ApiError::from(ServiceError::Domain(DomainError::InvalidData)),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(ServiceError::Domain(DomainError::NotFound)),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(ServiceError::Storage("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::MalformedBody("bad body".into()),
                StatusCode::BAD_REQUEST,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}

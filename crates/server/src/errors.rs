use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Failures surfaced by handlers. Messages are user-facing.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rendered as plain text, e.g. `Student 9 does not exist.`
    #[error("{0}")]
    NotFound(String),
    /// Pass-through call failed; rendered as `{"error": msg}`.
    #[error("{0}")]
    Upstream(String),
    /// Storage or serialization failure surfaced by the service layer.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(id) => Self::NotFound(format!("Student {id} does not exist.")),
            ServiceError::Storage(msg) => Self::Internal(format!("storage error: {msg}")),
            ServiceError::Serialization(msg) => Self::Internal(format!("serialization error: {msg}")),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            Self::Upstream(msg) => (StatusCode::BAD_GATEWAY, Json(serde_json::json!({"error": msg}))).into_response(),
            Self::Internal(msg) => {
                error!(error = %msg, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({"error": msg}))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status_codes() {
        let not_found = ApiError::from(ServiceError::NotFound(4)).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let storage = ApiError::from(ServiceError::Storage("disk full".into()));
        assert_eq!(storage.to_string(), "internal error: storage error: disk full");
        assert_eq!(storage.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let serde = ApiError::from(ServiceError::Serialization("eof".into())).into_response();
        assert_eq!(serde.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let upstream = ApiError::Upstream("error in /quote".into()).into_response();
        assert_eq!(upstream.status(), StatusCode::BAD_GATEWAY);
    }
}

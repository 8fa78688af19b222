use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pairing_core::SchedulerError;
use serde_json::json;

/// The one error type every handler returns. Wraps the taxonomy from
/// `pairing_core::SchedulerError` plus the request-parsing failures
/// that never reach the facade at all (bad date strings and the like).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    Scheduler(String),
}

impl From<SchedulerError> for ApiError {
    fn from(err: SchedulerError) -> Self {
        match err {
            SchedulerError::Validation(msg) => ApiError::Validation(msg),
            SchedulerError::Configuration(msg) => ApiError::Configuration(msg),
            SchedulerError::Scheduler(msg) => ApiError::Scheduler(msg),
        }
    }
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::Configuration(_) => "configuration_error",
            ApiError::Scheduler(_) => "scheduler_error",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration(_) | ApiError::Scheduler(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, ApiError::Configuration(_) | ApiError::Scheduler(_)) {
            log::error!("request failed: {self}");
        }

        let body = json!({
            "success": false,
            "error": { "kind": self.kind(), "message": self.to_string() },
        });

        (self.status_code(), Json(body)).into_response()
    }
}

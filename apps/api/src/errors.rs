use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::diagnosis::values::PublicValueError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The recommendation core never fails; these cover request-level problems.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl From<PublicValueError> for AppError {
    fn from(err: PublicValueError) -> Self {
        match err {
            PublicValueError::UnknownValue(_) => AppError::NotFound(err.to_string()),
            PublicValueError::ShadowValue(_) | PublicValueError::LimitReached => {
                AppError::Validation(err.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidBody(rejection) => {
                tracing::debug!("Rejected request body: {rejection}");
                (rejection.status(), "INVALID_BODY", rejection.body_text())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_public_value_maps_to_not_found() {
        let err: AppError = PublicValueError::UnknownValue(9).into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_limit_reached_maps_to_bad_request() {
        let err: AppError = PublicValueError::LimitReached.into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

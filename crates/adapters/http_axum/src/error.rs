//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use tamagotchi_domain::error::{ConflictError, NotFoundError, TamagotchiError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`TamagotchiError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(TamagotchiError);

impl From<TamagotchiError> for ApiError {
    fn from(err: TamagotchiError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<NotFoundError> for ApiError {
    fn from(err: NotFoundError) -> Self {
        Self(err.into())
    }
}

impl From<ConflictError> for ApiError {
    fn from(err: ConflictError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(
            ValidationError::MalformedBody {
                reason: rejection.body_text(),
            }
            .into(),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            TamagotchiError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            TamagotchiError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            TamagotchiError::Conflict(err) => {
                tracing::error!(error = %err, "unresolved write conflict");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            TamagotchiError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

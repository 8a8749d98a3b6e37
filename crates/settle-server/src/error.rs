//! Maps [`SettleError`] onto HTTP responses, the way `datasynth-server`'s
//! REST layer turns internal errors into status codes (see `rest/auth.rs`'s
//! `AuthError` -> `IntoResponse` impl).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use settle_core::SettleError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Newtype so we can implement [`IntoResponse`] for a foreign error type.
pub struct ApiError(pub SettleError);

impl From<SettleError> for ApiError {
    fn from(err: SettleError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SettleError::Validation(_) => StatusCode::BAD_REQUEST,
            SettleError::JobNotFound(_) => StatusCode::NOT_FOUND,
            SettleError::InputShape(_) | SettleError::AmountParse(_) => StatusCode::BAD_REQUEST,
            SettleError::Internal(_) | SettleError::Io(_) | SettleError::Archive(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crisislens_core::LensError;

/// Error wrapper translating failures into HTTP responses.
///
/// Every failure maps 1:1 to a status code with a JSON `detail` body;
/// nothing is retried or recovered silently.
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }
}

impl From<LensError> for ApiError {
    fn from(err: LensError) -> Self {
        let status = match &err {
            LensError::UnsupportedMediaType(_) | LensError::InvalidImage(_) => {
                StatusCode::BAD_REQUEST
            }
            LensError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

use poem::Response;
use poem::error::SizedLimitError;
use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::photo::errors::PhotoError;

/// Error body shared by every endpoint.
///
/// `message` carries a code-style identifier (e.g. `photo.too_large`)
/// that clients translate for display.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Answers requests stopped by the body size limit with the shared error
/// body, so an oversized photo reads as `photo.too_large`.
pub async fn size_limit_rejection(err: SizedLimitError) -> Response {
    let (status, message) = if matches!(err, SizedLimitError::PayloadTooLarge) {
        (StatusCode::PAYLOAD_TOO_LARGE, PhotoError::TooLarge.to_string())
    } else {
        (StatusCode::LENGTH_REQUIRED, "request.length_required".to_string())
    };

    let body = serde_json::json!({ "name": "ValidationError", "message": message });
    Response::builder()
        .status(status)
        .content_type("application/json")
        .body(body.to_string())
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::dish::errors::DishError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for DishError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            DishError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            DishError::InvalidIdentification => (StatusCode::BAD_GATEWAY, "GenerationError"),
            DishError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "UnavailableError"),
        };

        (status, Json(ErrorResponse::new(name, self.code())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::photo::errors::PhotoError;

    #[test]
    fn should_map_invalid_input_to_bad_request_with_photo_code() {
        let (status, json) = DishError::InvalidInput(PhotoError::TooLarge).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "photo.too_large");
    }

    #[test]
    fn should_map_unavailable_to_service_unavailable() {
        let (status, json) = DishError::Unavailable.into_error_response();

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json.0.message, "dish.unavailable");
    }
}

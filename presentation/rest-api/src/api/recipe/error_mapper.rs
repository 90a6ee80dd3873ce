use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            RecipeError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            RecipeError::InsufficientIngredients => {
                (StatusCode::UNPROCESSABLE_ENTITY, "ValidationError")
            }
            RecipeError::InvalidRecipe => (StatusCode::BAD_GATEWAY, "GenerationError"),
            RecipeError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "UnavailableError"),
        };

        (status, Json(ErrorResponse::new(name, self.code())))
    }
}

use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::recipe::use_cases::generate::{GenerateRecipeParams, GenerateRecipeUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::{GenerateRecipeRequest, RecipeResponse};
use crate::api::tags::ApiTags;

pub struct RecipeApi {
    generate_use_case: Arc<dyn GenerateRecipeUseCase>,
}

impl RecipeApi {
    pub fn new(generate_use_case: Arc<dyn GenerateRecipeUseCase>) -> Self {
        Self { generate_use_case }
    }
}

/// Recipe API
///
/// Endpoints for turning photos of ingredients into recipes.
#[OpenApi]
impl RecipeApi {
    /// Generate a recipe from a photo
    ///
    /// Extracts the ingredients visible in the photo and composes one recipe
    /// from them. Fails with 422 when no usable ingredients were found.
    #[oai(path = "/recipes/generate", method = "post", tag = "ApiTags::Recipes")]
    async fn generate_recipe(&self, body: Json<GenerateRecipeRequest>) -> GenerateRecipeResponse {
        match self
            .generate_use_case
            .execute(GenerateRecipeParams {
                photo_data_uri: body.0.photo_data_uri,
            })
            .await
        {
            Ok(recipe) => GenerateRecipeResponse::Ok(Json(recipe.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GenerateRecipeResponse::BadRequest(json),
                    422 => GenerateRecipeResponse::UnprocessableEntity(json),
                    502 => GenerateRecipeResponse::BadGateway(json),
                    _ => GenerateRecipeResponse::ServiceUnavailable(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GenerateRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use business::application::recipe::generate::GenerateRecipeUseCaseImpl;
    use business::domain::photo::policy::PhotoPolicy;
    use demo::{StaticIngredientExtractor, StaticRecipeComposer};
    use logger::TracingLogger;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    const JPEG_DATA_URI: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";

    fn test_client(extractor: StaticIngredientExtractor) -> TestClient<Route> {
        let use_case = Arc::new(GenerateRecipeUseCaseImpl {
            extractor: Arc::new(extractor),
            composer: Arc::new(StaticRecipeComposer),
            policy: PhotoPolicy::default(),
            min_ingredients: 1,
            timeout: Duration::from_secs(5),
            logger: Arc::new(TracingLogger::default()),
        });
        let service = OpenApiService::new(RecipeApi::new(use_case), "test", "0.0.0");
        TestClient::new(Route::new().nest("/", service))
    }

    #[tokio::test]
    async fn should_return_recipe_for_ingredient_photo() {
        let cli = test_client(StaticIngredientExtractor::default());

        let resp = cli
            .post("/recipes/generate")
            .body_json(&json!({ "photoDataUri": JPEG_DATA_URI }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("recipeName").assert_string("Caprese Salad");
        body.get("ingredients").array().assert_len(4);
        body.get("instructions").array().assert_len(5);
    }

    #[tokio::test]
    async fn should_return_unprocessable_entity_when_no_ingredients_found() {
        let cli = test_client(StaticIngredientExtractor::new(Vec::<String>::new()));

        let resp = cli
            .post("/recipes/generate")
            .body_json(&json!({ "photoDataUri": JPEG_DATA_URI }))
            .send()
            .await;

        resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("recipe.insufficient_ingredients");
    }

    #[tokio::test]
    async fn should_return_bad_request_for_non_image_payload() {
        let cli = test_client(StaticIngredientExtractor::default());

        let resp = cli
            .post("/recipes/generate")
            .body_json(&json!({ "photoDataUri": "data:text/plain;base64,aGVsbG8=" }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value()
            .object()
            .get("name")
            .assert_string("ValidationError");
    }
}

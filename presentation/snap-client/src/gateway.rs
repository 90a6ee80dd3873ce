use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use business::domain::dish::errors::DishError;
use business::domain::dish::model::DishIdentification;
use business::domain::dish::use_cases::identify::{IdentifyDishParams, IdentifyDishUseCase};
use business::domain::photo::errors::PhotoError;
use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::Recipe;
use business::domain::recipe::use_cases::generate::{GenerateRecipeParams, GenerateRecipeUseCase};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhotoRequest {
    photo_data_uri: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DishBody {
    dish_name: String,
    confidence: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeBody {
    recipe_name: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// What came back from one POST to the service.
enum Reply<T> {
    Ok(T),
    /// The error code carried in the error body's `message`.
    Rejected(String),
    Unreachable,
}

/// Runs both operations against a remote Recipe Snap API.
///
/// Error bodies are mapped back to the domain errors by their codes, so a
/// `SnapClient` behaves the same over HTTP as it does in-process.
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(90))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, photo_data_uri: String) -> Reply<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = match self
            .client
            .post(&url)
            .json(&PhotoRequest { photo_data_uri })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%url, error = %e, "Recipe Snap API request failed");
                return Reply::Unreachable;
            }
        };

        let status = response.status();
        if status.is_success() {
            return match response.json::<T>().await {
                Ok(body) => Reply::Ok(body),
                Err(e) => {
                    tracing::warn!(%url, error = %e, "Unreadable Recipe Snap API response");
                    Reply::Unreachable
                }
            };
        }

        match response.json::<ErrorBody>().await {
            Ok(body) => Reply::Rejected(body.message),
            Err(_) => match code_for_status(status) {
                Some(code) => Reply::Rejected(code),
                None => {
                    tracing::warn!(%url, %status, "Recipe Snap API error without error body");
                    Reply::Unreachable
                }
            },
        }
    }
}

/// Error code implied by a status alone, for rejections that arrive
/// without an error body.
fn code_for_status(status: StatusCode) -> Option<String> {
    (status == StatusCode::PAYLOAD_TOO_LARGE).then(|| PhotoError::TooLarge.to_string())
}

fn dish_error_from_code(code: &str) -> DishError {
    if let Ok(photo) = code.parse::<PhotoError>() {
        return DishError::InvalidInput(photo);
    }
    match code {
        "dish.invalid_identification" => DishError::InvalidIdentification,
        _ => DishError::Unavailable,
    }
}

fn recipe_error_from_code(code: &str) -> RecipeError {
    if let Ok(photo) = code.parse::<PhotoError>() {
        return RecipeError::InvalidInput(photo);
    }
    match code {
        "recipe.insufficient_ingredients" => RecipeError::InsufficientIngredients,
        "recipe.invalid_recipe" => RecipeError::InvalidRecipe,
        _ => RecipeError::Unavailable,
    }
}

#[async_trait]
impl IdentifyDishUseCase for HttpGateway {
    async fn execute(&self, params: IdentifyDishParams) -> Result<DishIdentification, DishError> {
        match self
            .post::<DishBody>("/dishes/identify", params.photo_data_uri)
            .await
        {
            Reply::Ok(body) => DishIdentification::new(body.dish_name, body.confidence),
            Reply::Rejected(code) => Err(dish_error_from_code(&code)),
            Reply::Unreachable => Err(DishError::Unavailable),
        }
    }
}

#[async_trait]
impl GenerateRecipeUseCase for HttpGateway {
    async fn execute(&self, params: GenerateRecipeParams) -> Result<Recipe, RecipeError> {
        match self
            .post::<RecipeBody>("/recipes/generate", params.photo_data_uri)
            .await
        {
            Reply::Ok(body) => Recipe::new(body.recipe_name, body.ingredients, body.instructions),
            Reply::Rejected(code) => Err(recipe_error_from_code(&code)),
            Reply::Unreachable => Err(RecipeError::Unavailable),
        }
    }
}

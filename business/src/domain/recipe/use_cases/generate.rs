use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;

pub struct GenerateRecipeParams {
    pub photo_data_uri: String,
}

#[async_trait]
pub trait GenerateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: GenerateRecipeParams) -> Result<Recipe, RecipeError>;
}

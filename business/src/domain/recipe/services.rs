use async_trait::async_trait;

use crate::domain::photo::model::PhotoPayload;

use super::errors::RecipeError;
use super::model::{IngredientList, Recipe};

/// Capability port for recognising the ingredients visible in a photo.
#[async_trait]
pub trait IngredientExtractorService: Send + Sync {
    async fn extract(&self, photo: &PhotoPayload) -> Result<IngredientList, RecipeError>;
}

/// Capability port for composing a recipe out of an ingredient list.
#[async_trait]
pub trait RecipeComposerService: Send + Sync {
    async fn compose(&self, ingredients: &IngredientList) -> Result<Recipe, RecipeError>;
}

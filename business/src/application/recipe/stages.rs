use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::photo::model::PhotoPayload;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{IngredientList, Recipe};
use crate::domain::recipe::services::{IngredientExtractorService, RecipeComposerService};
use crate::domain::shared::pipeline::Stage;

/// Photo -> ingredient list.
pub struct ExtractIngredients {
    pub extractor: Arc<dyn IngredientExtractorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl Stage<PhotoPayload> for ExtractIngredients {
    type Output = IngredientList;
    type Error = RecipeError;

    async fn run(&self, photo: PhotoPayload) -> Result<IngredientList, RecipeError> {
        let ingredients = self.extractor.extract(&photo).await?;

        self.logger.debug(&format!(
            "Ingredients extracted from photo {}: [{}]",
            photo.fingerprint(),
            ingredients
        ));

        Ok(ingredients)
    }
}

/// Ingredient list -> recipe, refusing lists shorter than `min_ingredients`.
pub struct ComposeRecipe {
    pub composer: Arc<dyn RecipeComposerService>,
    pub min_ingredients: usize,
}

#[async_trait]
impl Stage<IngredientList> for ComposeRecipe {
    type Output = Recipe;
    type Error = RecipeError;

    async fn run(&self, ingredients: IngredientList) -> Result<Recipe, RecipeError> {
        if ingredients.is_empty() || ingredients.len() < self.min_ingredients {
            return Err(RecipeError::InsufficientIngredients);
        }
        self.composer.compose(&ingredients).await
    }
}

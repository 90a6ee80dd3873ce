use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::recipe::stages::{ComposeRecipe, ExtractIngredients};
use crate::domain::logger::Logger;
use crate::domain::photo::policy::PhotoPolicy;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::services::{IngredientExtractorService, RecipeComposerService};
use crate::domain::recipe::use_cases::generate::{GenerateRecipeParams, GenerateRecipeUseCase};
use crate::domain::shared::pipeline::Stage;

pub const DEFAULT_MIN_INGREDIENTS: usize = 1;

pub struct GenerateRecipeUseCaseImpl {
    pub extractor: Arc<dyn IngredientExtractorService>,
    pub composer: Arc<dyn RecipeComposerService>,
    pub policy: PhotoPolicy,
    pub min_ingredients: usize,
    pub timeout: Duration,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateRecipeUseCase for GenerateRecipeUseCaseImpl {
    async fn execute(&self, params: GenerateRecipeParams) -> Result<Recipe, RecipeError> {
        let photo = match self.policy.accept(&params.photo_data_uri) {
            Ok(photo) => photo,
            Err(err) => {
                self.logger
                    .warn(&format!("Rejected photo for recipe generation: {}", err));
                return Err(err.into());
            }
        };

        self.logger.photo("Generating recipe from", &photo);

        let pipeline = ExtractIngredients {
            extractor: self.extractor.clone(),
            logger: self.logger.clone(),
        }
        .then(ComposeRecipe {
            composer: self.composer.clone(),
            min_ingredients: self.min_ingredients,
        });

        let result = match tokio::time::timeout(self.timeout, pipeline.run(photo)).await {
            Ok(result) => result,
            Err(_) => {
                self.logger.error(&format!(
                    "Recipe generation timed out after {}s",
                    self.timeout.as_secs()
                ));
                Err(RecipeError::Unavailable)
            }
        };

        match &result {
            Ok(recipe) => self.logger.info(&format!(
                "Recipe generated: {} ({} ingredients, {} steps)",
                recipe.recipe_name,
                recipe.ingredients.len(),
                recipe.instructions.len()
            )),
            Err(err) => self
                .logger
                .warn(&format!("Recipe generation failed: {}", err)),
        }

        result
    }
}

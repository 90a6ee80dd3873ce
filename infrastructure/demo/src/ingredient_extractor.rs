use async_trait::async_trait;

use business::domain::photo::model::PhotoPayload;
use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::IngredientList;
use business::domain::recipe::services::IngredientExtractorService;

/// Extractor that "sees" the same ingredients in every photo.
pub struct StaticIngredientExtractor {
    ingredients: Vec<String>,
}

impl StaticIngredientExtractor {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for StaticIngredientExtractor {
    fn default() -> Self {
        Self::new(["tomato", "basil", "mozzarella"])
    }
}

#[async_trait]
impl IngredientExtractorService for StaticIngredientExtractor {
    async fn extract(&self, _photo: &PhotoPayload) -> Result<IngredientList, RecipeError> {
        Ok(IngredientList::new(self.ingredients.iter().cloned()))
    }
}

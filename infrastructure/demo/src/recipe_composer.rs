use async_trait::async_trait;

use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::{IngredientList, Recipe};
use business::domain::recipe::services::RecipeComposerService;

const CAPRESE_NAME: &str = "Caprese Salad";
const CAPRESE_INGREDIENTS: [&str; 4] = ["tomato", "basil", "mozzarella", "balsamic glaze"];
const CAPRESE_INSTRUCTIONS: [&str; 5] = [
    "Slice the tomatoes and mozzarella.",
    "Arrange the tomato and mozzarella slices on a plate, alternating them.",
    "Garnish with fresh basil leaves.",
    "Drizzle with balsamic glaze.",
    "Serve immediately.",
];

/// Composer that answers with a Caprese Salad for any non-empty list.
#[derive(Default)]
pub struct StaticRecipeComposer;

#[async_trait]
impl RecipeComposerService for StaticRecipeComposer {
    async fn compose(&self, ingredients: &IngredientList) -> Result<Recipe, RecipeError> {
        if ingredients.is_empty() {
            return Err(RecipeError::InsufficientIngredients);
        }

        Recipe::new(
            CAPRESE_NAME,
            CAPRESE_INGREDIENTS.iter().map(|s| s.to_string()).collect(),
            CAPRESE_INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_refuse_empty_ingredient_list() {
        let result = StaticRecipeComposer.compose(&IngredientList::default()).await;
        assert_eq!(result, Err(RecipeError::InsufficientIngredients));
    }

    #[tokio::test]
    async fn should_compose_caprese_salad() {
        let recipe = StaticRecipeComposer
            .compose(&IngredientList::new(["tomato"]))
            .await
            .unwrap();

        assert_eq!(recipe.recipe_name, "Caprese Salad");
        assert_eq!(recipe.instructions.first().map(String::as_str), Some(CAPRESE_INSTRUCTIONS[0]));
    }
}

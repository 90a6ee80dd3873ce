use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::{IngredientList, Recipe};
use business::domain::recipe::services::RecipeComposerService;

use crate::client::OpenAIClient;
use crate::response::{chat_completion_text, find_json_object};

const SYSTEM_PROMPT: &str = r#"You are a helpful cooking assistant.
Given a list of ingredients identified in a photo, propose ONE simple recipe that uses them.

Core principles:
- Use the listed ingredients as the base; add at most a few common pantry items
- Keep the recipe simple and realistic
- Write instructions as short, ordered steps

Return ONLY valid JSON, no additional text."#;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRecipe {
    recipe_name: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: Vec<String>,
}

pub struct RecipeComposerOpenAI {
    client: OpenAIClient,
}

impl RecipeComposerOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_prompt(ingredients: &IngredientList) -> String {
        let ingredient_list: String = ingredients
            .iter()
            .map(|i| format!("- {}", i))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"INGREDIENTS:
{}

Return a JSON object with this EXACT structure:
{{
  "recipeName": "Recipe name",
  "ingredients": ["ingredient 1", "ingredient 2"],
  "instructions": ["Step 1", "Step 2", "Step 3"]
}}"#,
            ingredient_list
        )
    }

    fn parse_response(content: &str) -> Result<Recipe, RecipeError> {
        let json_str = find_json_object(content).ok_or(RecipeError::Unavailable)?;

        let raw: RawRecipe =
            serde_json::from_str(json_str).map_err(|_| RecipeError::Unavailable)?;

        Recipe::new(raw.recipe_name, raw.ingredients, raw.instructions)
    }
}

#[async_trait]
impl RecipeComposerService for RecipeComposerOpenAI {
    async fn compose(&self, ingredients: &IngredientList) -> Result<Recipe, RecipeError> {
        if ingredients.is_empty() {
            return Err(RecipeError::InsufficientIngredients);
        }

        let body = json!({
            "model": self.client.text_model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": Self::build_prompt(ingredients)},
            ],
            "temperature": 0.7,
            "max_tokens": 1000,
        });

        let data = self
            .client
            .post_json(&self.client.chat_completions_url(), &body)
            .await
            .ok_or(RecipeError::Unavailable)?;

        let content = chat_completion_text(&data).ok_or(RecipeError::Unavailable)?;

        Self::parse_response(content)
    }
}

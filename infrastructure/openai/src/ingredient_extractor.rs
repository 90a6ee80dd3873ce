use async_trait::async_trait;
use serde_json::json;

use business::domain::photo::model::PhotoPayload;
use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::model::IngredientList;
use business::domain::recipe::services::IngredientExtractorService;

use crate::client::OpenAIClient;
use crate::response::{find_json_array, responses_output_text};

const SYSTEM_PROMPT: &str = r#"You identify the ingredients in a photo of food or raw ingredients.
Return ONLY a JSON array of ingredient names.
- Use short, lowercase, singular English names: "tomato", not "3 Roma Tomatoes"
- List each ingredient once
- Ignore plates, cutlery, packaging and background objects
- If no ingredients are visible, return []

Example output:
["tomato","basil","mozzarella"]"#;

pub struct IngredientExtractorOpenAI {
    client: OpenAIClient,
}

impl IngredientExtractorOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn parse_response(content: &str) -> Result<IngredientList, RecipeError> {
        let json_str = find_json_array(content).ok_or(RecipeError::Unavailable)?;

        let parsed: Vec<serde_json::Value> =
            serde_json::from_str(json_str).map_err(|_| RecipeError::Unavailable)?;

        // Models occasionally answer with objects like {"name": "tomato"}.
        let names = parsed.iter().filter_map(|item| {
            item.as_str()
                .or_else(|| item.get("name").and_then(|n| n.as_str()))
                .map(|name| name.to_lowercase())
        });

        Ok(IngredientList::new(names))
    }
}

#[async_trait]
impl IngredientExtractorService for IngredientExtractorOpenAI {
    async fn extract(&self, photo: &PhotoPayload) -> Result<IngredientList, RecipeError> {
        let body = json!({
            "model": self.client.vision_model,
            "input": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "input_image",
                            "image_url": photo.to_data_uri(),
                            "detail": "low",
                        },
                        {
                            "type": "input_text",
                            "text": "List the ingredients in this photo.",
                        },
                    ],
                },
            ],
            "temperature": 0.1,
        });

        let data = self
            .client
            .post_json(&self.client.responses_url(), &body)
            .await
            .ok_or(RecipeError::Unavailable)?;

        let text = responses_output_text(&data).ok_or(RecipeError::Unavailable)?;

        Self::parse_response(text)
    }
}

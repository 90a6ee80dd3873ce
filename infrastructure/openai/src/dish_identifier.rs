use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use business::domain::dish::errors::DishError;
use business::domain::dish::model::DishIdentification;
use business::domain::dish::services::DishIdentifierService;
use business::domain::photo::model::PhotoPayload;

use crate::client::OpenAIClient;
use crate::response::{find_json_object, responses_output_text};

const SYSTEM_PROMPT: &str = r#"You are an expert food identifier.
Given a photo of a dish, identify the dish and estimate how confident you are.
Return ONLY a JSON object with these fields:
- "dishName": the common English name of the dish
- "confidence": a number between 0 and 1
- If the photo does not show food, return {"dishName":"","confidence":0}

Example outputs:
{"dishName":"Caprese Salad","confidence":0.92}
{"dishName":"Pad Thai","confidence":0.61}"#;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIdentification {
    dish_name: String,
    confidence: f64,
}

pub struct DishIdentifierOpenAI {
    client: OpenAIClient,
}

impl DishIdentifierOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn parse_response(content: &str) -> Result<DishIdentification, DishError> {
        let json_str = find_json_object(content).ok_or(DishError::Unavailable)?;

        let raw: RawIdentification =
            serde_json::from_str(json_str).map_err(|_| DishError::Unavailable)?;

        DishIdentification::new(raw.dish_name, raw.confidence)
    }
}

#[async_trait]
impl DishIdentifierService for DishIdentifierOpenAI {
    async fn identify(&self, photo: &PhotoPayload) -> Result<DishIdentification, DishError> {
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
                            "text": "Identify this dish.",
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
            .ok_or(DishError::Unavailable)?;

        let text = responses_output_text(&data).ok_or(DishError::Unavailable)?;

        Self::parse_response(text)
    }
}

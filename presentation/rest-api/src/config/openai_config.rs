use anyhow::Context;

use openai::client::{DEFAULT_BASE_URL, DEFAULT_TEXT_MODEL, DEFAULT_VISION_MODEL};

/// Configuration for OpenAI API access.
pub struct OpenAIConfig {
    pub api_key: String,
    pub base_url: String,
    pub vision_model: String,
    pub text_model: String,
}

impl OpenAIConfig {
    /// Environment variables:
    /// - OPENAI_API_KEY: API key (required)
    /// - OPENAI_BASE_URL: API base URL (default: "https://api.openai.com/v1")
    /// - OPENAI_VISION_MODEL: model for photo understanding (default: "gpt-4o")
    /// - OPENAI_TEXT_MODEL: model for recipe composition (default: "gpt-4o-mini")
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context(
                "OPENAI_API_KEY environment variable must be set when RECOGNITION_BACKEND=openai",
            )?;

        Ok(Self {
            api_key,
            base_url: lookup("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            vision_model: lookup("OPENAI_VISION_MODEL")
                .unwrap_or_else(|| DEFAULT_VISION_MODEL.to_string()),
            text_model: lookup("OPENAI_TEXT_MODEL")
                .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
        })
    }
}

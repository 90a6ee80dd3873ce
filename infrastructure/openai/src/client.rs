use reqwest::Client;
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_VISION_MODEL: &str = "gpt-4o";
pub const DEFAULT_TEXT_MODEL: &str = "gpt-4o-mini";

/// Shared OpenAI HTTP client configuration.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Clone)]
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub vision_model: String,
    pub text_model: String,
}

impl OpenAIClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_models(
        mut self,
        vision_model: impl Into<String>,
        text_model: impl Into<String>,
    ) -> Self {
        self.vision_model = vision_model.into();
        self.text_model = text_model.into();
        self
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Returns the responses endpoint URL.
    pub fn responses_url(&self) -> String {
        format!("{}/responses", self.base_url)
    }

    /// POSTs `body` as JSON and returns the decoded JSON reply.
    ///
    /// Transport failures and non-2xx replies are logged and yield `None`;
    /// callers map that to their own domain error.
    pub async fn post_json(&self, url: &str, body: &Value) -> Option<Value> {
        let response = match self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Authorization", self.auth_header())
            .json(body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(url, error = %err, "OpenAI request failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "OpenAI returned an error status");
            return None;
        }

        match response.json::<Value>().await {
            Ok(data) => Some(data),
            Err(err) => {
                tracing::warn!(url, error = %err, "OpenAI reply was not valid JSON");
                None
            }
        }
    }
}

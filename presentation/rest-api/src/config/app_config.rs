use poem::middleware::Cors;

use super::{
    cors_config,
    env::process_env,
    openai_config::OpenAIConfig,
    recognition_config::{RecognitionBackend, RecognitionConfig},
    server_config::ServerConfig,
};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub recognition: RecognitionConfig,
    /// Present only when the OpenAI backend is selected.
    pub openai: Option<OpenAIConfig>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let recognition = RecognitionConfig::from_lookup(lookup)?;
        let openai = match recognition.backend {
            RecognitionBackend::OpenAI => Some(OpenAIConfig::from_lookup(lookup)?),
            RecognitionBackend::Demo => None,
        };

        Ok(Self {
            server: ServerConfig::from_lookup(lookup)?,
            cors: cors_config::init_cors(lookup),
            recognition,
            openai,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_not_require_openai_key_for_demo_backend() {
        let config = AppConfig::from_lookup(&|_: &str| None).unwrap();
        assert!(config.openai.is_none());
    }

    #[test]
    fn should_fail_when_openai_selected_without_key() {
        let lookup = |name: &str| (name == "RECOGNITION_BACKEND").then(|| "openai".to_string());
        assert!(AppConfig::from_lookup(&lookup).is_err());
    }
}

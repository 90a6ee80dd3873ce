use std::time::Duration;

use business::application::recipe::generate::DEFAULT_MIN_INGREDIENTS;
use business::domain::photo::policy::{DEFAULT_MAX_PHOTO_BYTES, PhotoPolicy};

use super::env::parse_or;

/// Which capability family backs the dish and recipe operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionBackend {
    OpenAI,
    Demo,
}

impl std::fmt::Display for RecognitionBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecognitionBackend::OpenAI => write!(f, "openai"),
            RecognitionBackend::Demo => write!(f, "demo"),
        }
    }
}

impl std::str::FromStr for RecognitionBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(RecognitionBackend::OpenAI),
            "demo" => Ok(RecognitionBackend::Demo),
            _ => Err(format!("Invalid recognition backend: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecognitionConfig {
    pub backend: RecognitionBackend,
    pub max_photo_bytes: usize,
    pub min_ingredients: usize,
    pub capability_timeout: Duration,
}

impl RecognitionConfig {
    /// Environment variables:
    /// - RECOGNITION_BACKEND: "openai" or "demo" (default: "demo")
    /// - MAX_PHOTO_BYTES: decoded photo size limit (default: 10 MiB)
    /// - MIN_INGREDIENTS: fewest ingredients a recipe may be composed from (default: 1)
    /// - CAPABILITY_TIMEOUT_SECS: deadline per operation (default: 60)
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let backend = parse_or(lookup, "RECOGNITION_BACKEND", RecognitionBackend::Demo)?;
        let max_photo_bytes = parse_or(lookup, "MAX_PHOTO_BYTES", DEFAULT_MAX_PHOTO_BYTES)?;
        let min_ingredients = parse_or(lookup, "MIN_INGREDIENTS", DEFAULT_MIN_INGREDIENTS)?;
        let timeout_secs = parse_or(lookup, "CAPABILITY_TIMEOUT_SECS", 60u64)?;

        if max_photo_bytes == 0 {
            anyhow::bail!("MAX_PHOTO_BYTES must be greater than zero");
        }
        if timeout_secs == 0 {
            anyhow::bail!("CAPABILITY_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Self {
            backend,
            max_photo_bytes,
            min_ingredients: min_ingredients.max(1),
            capability_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn photo_policy(&self) -> PhotoPolicy {
        PhotoPolicy::new(self.max_photo_bytes)
    }

    /// Largest accepted request body: base64 inflates the photo by 4/3,
    /// plus room for the JSON envelope.
    pub fn max_request_bytes(&self) -> usize {
        (self.max_photo_bytes / 3)
            .saturating_mul(4)
            .saturating_add(8 * 1024)
    }
}

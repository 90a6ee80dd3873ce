use std::sync::Arc;

use logger::TracingLogger;

use demo::{StaticDishIdentifier, StaticIngredientExtractor, StaticRecipeComposer};
use openai::{
    DishIdentifierOpenAI, IngredientExtractorOpenAI, OpenAIClient, RecipeComposerOpenAI,
};

use business::application::dish::identify::IdentifyDishUseCaseImpl;
use business::application::recipe::generate::GenerateRecipeUseCaseImpl;
use business::domain::dish::services::DishIdentifierService;
use business::domain::recipe::services::{IngredientExtractorService, RecipeComposerService};

use crate::api::dish::routes::DishApi;
use crate::api::health::routes::HealthApi;
use crate::api::recipe::routes::RecipeApi;
use crate::config::app_config::AppConfig;
use crate::config::recognition_config::RecognitionBackend;

struct Capabilities {
    identifier: Arc<dyn DishIdentifierService>,
    extractor: Arc<dyn IngredientExtractorService>,
    composer: Arc<dyn RecipeComposerService>,
}

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub dish_api: DishApi,
    pub recipe_api: RecipeApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger::new("rest-api"));
        let recognition = &config.recognition;

        let capabilities = Self::capabilities(config)?;
        tracing::info!(backend = %recognition.backend, "Recognition backend selected");

        let identify_use_case = Arc::new(IdentifyDishUseCaseImpl {
            identifier: capabilities.identifier,
            policy: recognition.photo_policy(),
            timeout: recognition.capability_timeout,
            logger: logger.clone(),
        });
        let generate_use_case = Arc::new(GenerateRecipeUseCaseImpl {
            extractor: capabilities.extractor,
            composer: capabilities.composer,
            policy: recognition.photo_policy(),
            min_ingredients: recognition.min_ingredients,
            timeout: recognition.capability_timeout,
            logger,
        });

        Ok(Self {
            health_api: HealthApi::new(recognition.backend.to_string()),
            dish_api: DishApi::new(identify_use_case),
            recipe_api: RecipeApi::new(generate_use_case),
        })
    }

    fn capabilities(config: &AppConfig) -> anyhow::Result<Capabilities> {
        match config.recognition.backend {
            RecognitionBackend::OpenAI => {
                let openai_config = config
                    .openai
                    .as_ref()
                    .ok_or_else(|| {
                        anyhow::anyhow!("OpenAI backend selected without configuration")
                    })?;
                let client = OpenAIClient::new(openai_config.api_key.clone())
                    .with_base_url(openai_config.base_url.clone())
                    .with_models(
                        openai_config.vision_model.clone(),
                        openai_config.text_model.clone(),
                    );

                Ok(Capabilities {
                    identifier: Arc::new(DishIdentifierOpenAI::new(client.clone())),
                    extractor: Arc::new(IngredientExtractorOpenAI::new(client.clone())),
                    composer: Arc::new(RecipeComposerOpenAI::new(client)),
                })
            }
            RecognitionBackend::Demo => Ok(Capabilities {
                identifier: Arc::new(StaticDishIdentifier::default()),
                extractor: Arc::new(StaticIngredientExtractor::default()),
                composer: Arc::new(StaticRecipeComposer),
            }),
        }
    }
}

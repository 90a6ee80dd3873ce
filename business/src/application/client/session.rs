use std::sync::Arc;

use crate::domain::client::errors::ClientError;
use crate::domain::client::model::Outcome;
use crate::domain::dish::model::DishIdentification;
use crate::domain::dish::use_cases::identify::{IdentifyDishParams, IdentifyDishUseCase};
use crate::domain::logger::Logger;
use crate::domain::photo::errors::PhotoError;
use crate::domain::photo::model::{MediaType, PhotoPayload};
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::use_cases::generate::{GenerateRecipeParams, GenerateRecipeUseCase};

/// User-facing session around the two operations.
///
/// Holds at most one selected photo and one result per operation. Both
/// operations take `&mut self`, so a session never has two requests in
/// flight.
pub struct SnapClient {
    identify_use_case: Arc<dyn IdentifyDishUseCase>,
    generate_use_case: Arc<dyn GenerateRecipeUseCase>,
    logger: Arc<dyn Logger>,
    photo_data_uri: Option<String>,
    dish: Option<Outcome<DishIdentification>>,
    recipe: Option<Outcome<Recipe>>,
}

impl SnapClient {
    pub fn new(
        identify_use_case: Arc<dyn IdentifyDishUseCase>,
        generate_use_case: Arc<dyn GenerateRecipeUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            identify_use_case,
            generate_use_case,
            logger,
            photo_data_uri: None,
            dish: None,
            recipe: None,
        }
    }

    /// Replaces the selected photo with an already encoded data URI.
    pub fn select_photo(&mut self, data_uri: impl Into<String>) {
        self.photo_data_uri = Some(data_uri.into());
        self.logger.debug("Photo selected");
    }

    /// Encodes raw file bytes the way a browser `readAsDataURL` does and
    /// selects the result.
    pub fn select_photo_bytes(
        &mut self,
        media_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), PhotoError> {
        let photo = PhotoPayload::new(MediaType::parse(media_type)?, bytes)?;
        self.select_photo(photo.to_data_uri());
        Ok(())
    }

    pub fn photo(&self) -> Option<&str> {
        self.photo_data_uri.as_deref()
    }

    pub fn dish(&self) -> Option<&Outcome<DishIdentification>> {
        self.dish.as_ref()
    }

    pub fn recipe(&self) -> Option<&Outcome<Recipe>> {
        self.recipe.as_ref()
    }

    pub async fn identify_dish(&mut self) -> Result<&Outcome<DishIdentification>, ClientError> {
        let photo_data_uri = self.photo_data_uri.clone().ok_or(ClientError::NoPhoto)?;

        let outcome = match self
            .identify_use_case
            .execute(IdentifyDishParams { photo_data_uri })
            .await
        {
            Ok(identification) => Outcome::Ready(identification),
            Err(err) => {
                self.logger
                    .error(&format!("Error identifying dish: {}", err.code()));
                Outcome::Failed(format!("Failed to identify dish: {}", err.code()))
            }
        };

        Ok(self.dish.insert(outcome))
    }

    pub async fn generate_recipe(&mut self) -> Result<&Outcome<Recipe>, ClientError> {
        let photo_data_uri = self.photo_data_uri.clone().ok_or(ClientError::NoPhoto)?;

        let outcome = match self
            .generate_use_case
            .execute(GenerateRecipeParams { photo_data_uri })
            .await
        {
            Ok(recipe) => Outcome::Ready(recipe),
            Err(err) => {
                self.logger
                    .error(&format!("Error generating recipe: {}", err.code()));
                Outcome::Failed(format!("Failed to generate recipe: {}", err.code()))
            }
        };

        Ok(self.recipe.insert(outcome))
    }
}

use async_trait::async_trait;

use business::domain::dish::errors::DishError;
use business::domain::dish::model::DishIdentification;
use business::domain::dish::services::DishIdentifierService;
use business::domain::photo::model::PhotoPayload;

/// Fixed-answer dish identifier for offline demos and tests.
pub struct StaticDishIdentifier {
    dish_name: String,
    confidence: f64,
}

impl StaticDishIdentifier {
    pub fn new(dish_name: impl Into<String>, confidence: f64) -> Self {
        Self {
            dish_name: dish_name.into(),
            confidence,
        }
    }
}

impl Default for StaticDishIdentifier {
    fn default() -> Self {
        Self::new("Caprese Salad", 0.92)
    }
}

#[async_trait]
impl DishIdentifierService for StaticDishIdentifier {
    async fn identify(&self, _photo: &PhotoPayload) -> Result<DishIdentification, DishError> {
        DishIdentification::new(self.dish_name.clone(), self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::photo::model::MediaType;

    fn photo() -> PhotoPayload {
        PhotoPayload::new(MediaType::parse("image/jpeg").unwrap(), vec![0xFF, 0xD8, 0xFF]).unwrap()
    }

    #[tokio::test]
    async fn should_answer_caprese_salad_by_default() {
        let identification = StaticDishIdentifier::default().identify(&photo()).await.unwrap();

        assert_eq!(identification.dish_name, "Caprese Salad");
        assert_eq!(identification.confidence.value(), 0.92);
    }

    #[tokio::test]
    async fn should_refuse_misconfigured_confidence() {
        let result = StaticDishIdentifier::new("Soup", 1.5).identify(&photo()).await;
        assert_eq!(result, Err(DishError::InvalidIdentification));
    }
}

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::dish::errors::DishError;
use crate::domain::dish::model::DishIdentification;
use crate::domain::dish::services::DishIdentifierService;
use crate::domain::dish::use_cases::identify::{IdentifyDishParams, IdentifyDishUseCase};
use crate::domain::logger::Logger;
use crate::domain::photo::policy::PhotoPolicy;

pub struct IdentifyDishUseCaseImpl {
    pub identifier: Arc<dyn DishIdentifierService>,
    pub policy: PhotoPolicy,
    pub timeout: Duration,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl IdentifyDishUseCase for IdentifyDishUseCaseImpl {
    async fn execute(&self, params: IdentifyDishParams) -> Result<DishIdentification, DishError> {
        let photo = match self.policy.accept(&params.photo_data_uri) {
            Ok(photo) => photo,
            Err(err) => {
                self.logger
                    .warn(&format!("Rejected photo for dish identification: {}", err));
                return Err(err.into());
            }
        };

        self.logger.photo("Identifying dish from", &photo);

        let result = tokio::time::timeout(self.timeout, self.identifier.identify(&photo))
            .await
            .map_err(|_| {
                self.logger.error(&format!(
                    "Dish identification timed out after {}s",
                    self.timeout.as_secs()
                ));
                DishError::Unavailable
            })??;

        self.logger.info(&format!(
            "Dish identified: {} (confidence: {})",
            result.dish_name, result.confidence
        ));

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::photo::errors::PhotoError;
    use crate::domain::photo::model::PhotoPayload;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use mockall::mock;

    mock! {
        pub DishIdentifier {}

        #[async_trait]
        impl DishIdentifierService for DishIdentifier {
            async fn identify(&self, photo: &PhotoPayload) -> Result<DishIdentification, DishError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn jpeg_data_uri() -> String {
        let bytes = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
        format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes))
    }

    fn use_case(identifier: MockDishIdentifier) -> IdentifyDishUseCaseImpl {
        IdentifyDishUseCaseImpl {
            identifier: Arc::new(identifier),
            policy: PhotoPolicy::default(),
            timeout: Duration::from_secs(5),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_identify_dish_when_photo_is_valid() {
        let mut mock_identifier = MockDishIdentifier::new();
        mock_identifier
            .expect_identify()
            .withf(|photo| photo.media_type().as_str() == "image/jpeg")
            .returning(|_| DishIdentification::new("Caprese Salad", 0.91));

        let result = use_case(mock_identifier)
            .execute(IdentifyDishParams {
                photo_data_uri: jpeg_data_uri(),
            })
            .await;

        assert!(result.is_ok());
        let identification = result.unwrap();
        assert_eq!(identification.dish_name, "Caprese Salad");
        assert!((0.0..=1.0).contains(&identification.confidence.value()));
    }

    #[tokio::test]
    async fn should_return_invalid_input_without_calling_capability_when_payload_empty() {
        let mut mock_identifier = MockDishIdentifier::new();
        mock_identifier.expect_identify().never();

        let result = use_case(mock_identifier)
            .execute(IdentifyDishParams {
                photo_data_uri: String::new(),
            })
            .await;

        assert_eq!(result, Err(DishError::InvalidInput(PhotoError::Missing)));
    }

    #[tokio::test]
    async fn should_return_invalid_input_when_payload_is_not_an_image() {
        let mut mock_identifier = MockDishIdentifier::new();
        mock_identifier.expect_identify().never();

        let result = use_case(mock_identifier)
            .execute(IdentifyDishParams {
                photo_data_uri: format!("data:image/png;base64,{}", STANDARD.encode("not a png")),
            })
            .await;

        assert_eq!(result, Err(DishError::InvalidInput(PhotoError::NotAnImage)));
    }

    #[tokio::test]
    async fn should_return_error_when_capability_is_unavailable() {
        let mut mock_identifier = MockDishIdentifier::new();
        mock_identifier
            .expect_identify()
            .returning(|_| Err(DishError::Unavailable));

        let result = use_case(mock_identifier)
            .execute(IdentifyDishParams {
                photo_data_uri: jpeg_data_uri(),
            })
            .await;

        assert_eq!(result, Err(DishError::Unavailable));
    }

    struct HangingIdentifier;

    #[async_trait]
    impl DishIdentifierService for HangingIdentifier {
        async fn identify(&self, _photo: &PhotoPayload) -> Result<DishIdentification, DishError> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn should_return_unavailable_when_capability_hangs() {
        let use_case = IdentifyDishUseCaseImpl {
            identifier: Arc::new(HangingIdentifier),
            policy: PhotoPolicy::default(),
            timeout: Duration::from_secs(60),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(IdentifyDishParams {
                photo_data_uri: jpeg_data_uri(),
            })
            .await;

        assert_eq!(result, Err(DishError::Unavailable));
    }

    #[tokio::test]
    async fn should_return_same_shape_on_repeated_calls() {
        let mut mock_identifier = MockDishIdentifier::new();
        mock_identifier
            .expect_identify()
            .times(2)
            .returning(|_| DishIdentification::new("Margherita Pizza", 0.7));
        let use_case = use_case(mock_identifier);

        let first = use_case
            .execute(IdentifyDishParams {
                photo_data_uri: jpeg_data_uri(),
            })
            .await
            .unwrap();
        let second = use_case
            .execute(IdentifyDishParams {
                photo_data_uri: jpeg_data_uri(),
            })
            .await
            .unwrap();

        assert!(!first.dish_name.is_empty());
        assert!(!second.dish_name.is_empty());
    }
}

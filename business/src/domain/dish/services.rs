use async_trait::async_trait;

use crate::domain::photo::model::PhotoPayload;

use super::errors::DishError;
use super::model::DishIdentification;

/// Capability port for recognising which dish a photo shows.
///
/// Implementations may call a remote vision model or return fixed data;
/// the use case only depends on this trait.
#[async_trait]
pub trait DishIdentifierService: Send + Sync {
    async fn identify(&self, photo: &PhotoPayload) -> Result<DishIdentification, DishError>;
}

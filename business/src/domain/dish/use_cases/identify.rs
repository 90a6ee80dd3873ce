use async_trait::async_trait;

use crate::domain::dish::errors::DishError;
use crate::domain::dish::model::DishIdentification;

pub struct IdentifyDishParams {
    pub photo_data_uri: String,
}

#[async_trait]
pub trait IdentifyDishUseCase: Send + Sync {
    async fn execute(&self, params: IdentifyDishParams) -> Result<DishIdentification, DishError>;
}

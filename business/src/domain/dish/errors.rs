use crate::domain::photo::errors::PhotoError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DishError {
    #[error("dish.invalid_input")]
    InvalidInput(#[from] PhotoError),
    #[error("dish.invalid_identification")]
    InvalidIdentification,
    #[error("dish.unavailable")]
    Unavailable,
}

impl DishError {
    /// The most specific error code, descending into photo errors.
    pub fn code(&self) -> String {
        match self {
            DishError::InvalidInput(photo) => photo.to_string(),
            other => other.to_string(),
        }
    }
}

use crate::domain::photo::errors::PhotoError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.invalid_input")]
    InvalidInput(#[from] PhotoError),
    #[error("recipe.insufficient_ingredients")]
    InsufficientIngredients,
    #[error("recipe.invalid_recipe")]
    InvalidRecipe,
    #[error("recipe.unavailable")]
    Unavailable,
}

impl RecipeError {
    /// The most specific error code, descending into photo errors.
    pub fn code(&self) -> String {
        match self {
            RecipeError::InvalidInput(photo) => photo.to_string(),
            other => other.to_string(),
        }
    }
}

pub mod client;
pub mod dish_identifier;
pub mod ingredient_extractor;
pub mod recipe_composer;
pub mod response;

pub use client::OpenAIClient;
pub use dish_identifier::DishIdentifierOpenAI;
pub use ingredient_extractor::IngredientExtractorOpenAI;
pub use recipe_composer::RecipeComposerOpenAI;

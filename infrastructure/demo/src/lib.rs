//! Fixed-data capabilities.
//!
//! They ignore the photo content and always answer with the Caprese Salad
//! fixtures, which makes the service usable without model credentials and
//! gives tests a deterministic backend.

pub mod dish_identifier;
pub mod ingredient_extractor;
pub mod recipe_composer;

pub use dish_identifier::StaticDishIdentifier;
pub use ingredient_extractor::StaticIngredientExtractor;
pub use recipe_composer::StaticRecipeComposer;

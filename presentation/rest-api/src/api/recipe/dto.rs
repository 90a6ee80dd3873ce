use poem_openapi::Object;

use business::domain::recipe::model::Recipe;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct GenerateRecipeRequest {
    /// A photo of food ingredients, as a data URI that must include a MIME
    /// type and use Base64 encoding: 'data:<mimetype>;base64,<encoded_data>'
    pub photo_data_uri: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct RecipeResponse {
    /// The name of the generated recipe
    pub recipe_name: String,
    /// Ingredients required for the recipe
    pub ingredients: Vec<String>,
    /// Step-by-step instructions, in order
    pub instructions: Vec<String>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            recipe_name: recipe.recipe_name,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
        }
    }
}

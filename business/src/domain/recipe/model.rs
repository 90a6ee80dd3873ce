use serde::{Deserialize, Serialize};

use super::errors::RecipeError;

/// Ingredient names recognised in a photo.
///
/// Blank names and case-insensitive duplicates are dropped; first-seen
/// order is kept although it carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientList(Vec<String>);

impl IngredientList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ingredients: Vec<String> = Vec::new();
        for name in names {
            let name = name.into().trim().to_string();
            if name.is_empty() {
                continue;
            }
            if ingredients.iter().any(|i| i.eq_ignore_ascii_case(&name)) {
                continue;
            }
            ingredients.push(name);
        }
        Self(ingredients)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl std::fmt::Display for IngredientList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

/// A recipe composed from an ingredient list.
///
/// `instructions` is a step sequence: index 0 is performed first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub recipe_name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl Recipe {
    pub fn new(
        recipe_name: impl Into<String>,
        ingredients: Vec<String>,
        instructions: Vec<String>,
    ) -> Result<Self, RecipeError> {
        let recipe_name = recipe_name.into().trim().to_string();
        if recipe_name.is_empty() {
            return Err(RecipeError::InvalidRecipe);
        }

        let ingredients = clean_lines(ingredients);
        if ingredients.is_empty() {
            return Err(RecipeError::InvalidRecipe);
        }

        let instructions = clean_lines(instructions);
        if instructions.is_empty() {
            return Err(RecipeError::InvalidRecipe);
        }

        Ok(Self {
            recipe_name,
            ingredients,
            instructions,
        })
    }
}

fn clean_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

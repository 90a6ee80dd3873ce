use std::fmt;

use serde::Serialize;

use business::domain::client::model::Outcome;
use business::domain::dish::model::DishIdentification;
use business::domain::recipe::model::Recipe;

/// Both result slots of a session, shaped like the HTTP responses.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dish: Option<ReportEntry<DishView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<ReportEntry<RecipeView>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReportEntry<T> {
    Ready(T),
    Failed { error: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DishView {
    pub dish_name: String,
    pub confidence: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    pub recipe_name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl From<&DishIdentification> for DishView {
    fn from(dish: &DishIdentification) -> Self {
        Self {
            dish_name: dish.dish_name.clone(),
            confidence: dish.confidence.value(),
        }
    }
}

impl From<&Recipe> for RecipeView {
    fn from(recipe: &Recipe) -> Self {
        Self {
            recipe_name: recipe.recipe_name.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
        }
    }
}

impl Report {
    pub fn new(
        dish: Option<&Outcome<DishIdentification>>,
        recipe: Option<&Outcome<Recipe>>,
    ) -> Self {
        Self {
            dish: dish.map(|outcome| entry(outcome, |d| DishView::from(d))),
            recipe: recipe.map(|outcome| entry(outcome, |r| RecipeView::from(r))),
        }
    }

    /// True when any requested operation failed.
    pub fn has_failures(&self) -> bool {
        matches!(self.dish, Some(ReportEntry::Failed { .. }))
            || matches!(self.recipe, Some(ReportEntry::Failed { .. }))
    }
}

fn entry<T, V>(outcome: &Outcome<T>, view: impl Fn(&T) -> V) -> ReportEntry<V> {
    match outcome {
        Outcome::Ready(value) => ReportEntry::Ready(view(value)),
        Outcome::Failed(message) => ReportEntry::Failed {
            error: message.clone(),
        },
    }
}

/// Plain-text rendering for a terminal.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.dish {
            Some(ReportEntry::Ready(dish)) => {
                writeln!(f, "Dish: {}", dish.dish_name)?;
                writeln!(f, "Confidence: {:.0}%", dish.confidence * 100.0)?;
            }
            Some(ReportEntry::Failed { error }) => writeln!(f, "{}", error)?,
            None => {}
        }

        if self.dish.is_some() && self.recipe.is_some() {
            writeln!(f)?;
        }

        match &self.recipe {
            Some(ReportEntry::Ready(recipe)) => {
                writeln!(f, "{}", recipe.recipe_name)?;
                writeln!(f, "\nIngredients:")?;
                for ingredient in &recipe.ingredients {
                    writeln!(f, "  - {}", ingredient)?;
                }
                writeln!(f, "\nInstructions:")?;
                for (step, instruction) in recipe.instructions.iter().enumerate() {
                    writeln!(f, "  {}. {}", step + 1, instruction)?;
                }
            }
            Some(ReportEntry::Failed { error }) => writeln!(f, "{}", error)?,
            None => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe::new(
            "Toast",
            vec!["bread".to_string()],
            vec!["Slice.".to_string(), "Toast.".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn should_number_instructions_in_order() {
        let outcome = Outcome::Ready(recipe());
        let rendered = Report::new(None, Some(&outcome)).to_string();

        assert!(rendered.contains("  1. Slice.\n  2. Toast.\n"));
        assert!(rendered.contains("  - bread"));
    }

    #[test]
    fn should_render_failure_message_next_to_ready_result() {
        let dish = Outcome::Failed("Failed to identify dish: dish.unavailable".to_string());
        let recipe = Outcome::Ready(recipe());
        let report = Report::new(Some(&dish), Some(&recipe));

        let rendered = report.to_string();

        assert!(report.has_failures());
        assert!(rendered.starts_with("Failed to identify dish: dish.unavailable\n"));
        assert!(rendered.contains("Toast"));
    }

    #[test]
    fn should_serialize_with_http_field_names() {
        let dish = Outcome::Ready(DishIdentification::new("Caprese Salad", 0.92).unwrap());
        let json = serde_json::to_value(Report::new(Some(&dish), None)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "dish": { "dishName": "Caprese Salad", "confidence": 0.92 } })
        );
    }
}

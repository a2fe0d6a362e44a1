use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Suffix appended to the display name of a recipe that needs ingredients
/// the user does not have.
pub const MISSING_MARKER: &str = " 🛒";

/// Wire shape of one entry in the model's structured answer. Every field is
/// required; an entry missing any of them fails the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeEntry {
    pub name: String,
    pub time: String,
    pub steps: String,
    pub missing_ingredients: Vec<String>,
}

/// One recipe as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeCard {
    pub name: String,
    /// Name with the shopping marker appended when the recipe has missing
    /// ingredients.
    pub display_name: String,
    pub time: String,
    pub steps: String,
    pub missing_ingredients: Vec<String>,
}

impl From<RecipeEntry> for RecipeCard {
    fn from(entry: RecipeEntry) -> Self {
        let display_name = if entry.missing_ingredients.is_empty() {
            entry.name.clone()
        } else {
            format!("{}{}", entry.name, MISSING_MARKER)
        };

        Self {
            name: entry.name,
            display_name,
            time: entry.time,
            steps: entry.steps,
            missing_ingredients: entry.missing_ingredients,
        }
    }
}

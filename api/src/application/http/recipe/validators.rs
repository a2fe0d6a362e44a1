use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use bitebot_core::domain::recipe::{
    entities::RecipeOutcome,
    value_objects::{Diet, OutputMode, TimeBudget},
};

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateRecipesTextRequest {
    #[validate(length(
        min = 1,
        max = 5000,
        message = "ingredients must be between 1 and 5000 characters"
    ))]
    pub ingredients: String,
    pub diet: Diet,
    pub max_time: TimeBudget,
    /// Defaults to structured when omitted
    pub mode: Option<OutputMode>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ExportRecipeRequest {
    /// The outcome of a previous generation, echoed back for rendering
    pub outcome: RecipeOutcome,
}

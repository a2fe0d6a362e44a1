use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp,
    engine::entities::SelectedEngine,
    recipe::{
        entities::{CartState, RecipeCard},
        value_objects::{Diet, TimeBudget},
    },
};

/// Result of one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeGeneration {
    pub id: Uuid,
    /// Model that produced the answer.
    pub engine: String,
    pub diet: Diet,
    pub max_time: TimeBudget,
    pub outcome: RecipeOutcome,
    pub created_at: DateTime<Utc>,
}

/// What the model answered, tagged by output mode. Freeform output stays an
/// opaque text block; structured output carries the parsed cards plus the
/// cart derived from them. A cart only exists in structured mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum RecipeOutcome {
    Freeform {
        text: String,
    },
    Structured {
        recipes: Vec<RecipeCard>,
        cart: CartState,
    },
}

impl RecipeGeneration {
    pub fn new(
        engine: &SelectedEngine,
        diet: Diet,
        max_time: TimeBudget,
        outcome: RecipeOutcome,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            engine: engine.model.to_string(),
            diet,
            max_time,
            outcome,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freeform_outcome_serializes_without_cart() {
        let outcome = RecipeOutcome::Freeform {
            text: "## Masala Toast".to_string(),
        };

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["mode"], "freeform");
        assert_eq!(json["text"], "## Masala Toast");
        assert!(json.get("cart").is_none());
        assert!(json.get("recipes").is_none());
    }

    #[test]
    fn test_structured_outcome_serializes_with_cart() {
        let outcome = RecipeOutcome::Structured {
            recipes: vec![],
            cart: CartState::default(),
        };

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["mode"], "structured");
        assert!(json.get("cart").is_some());
    }
}

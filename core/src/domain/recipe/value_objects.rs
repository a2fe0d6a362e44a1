use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Dietary constraint picked on the form. The wire accepts both label
/// styles; which set the form displays is configuration (`DietLabelStyle`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Diet {
    #[serde(alias = "Non-veg")]
    Standard,
    #[serde(alias = "Veg")]
    Vegetarian,
    Jain,
    Vegan,
}

impl Diet {
    pub const ALL: [Diet; 4] = [Diet::Standard, Diet::Vegetarian, Diet::Jain, Diet::Vegan];

    pub fn label(&self, style: DietLabelStyle) -> &'static str {
        match (self, style) {
            (Diet::Standard, DietLabelStyle::Classic) => "Standard",
            (Diet::Standard, DietLabelStyle::Compact) => "Non-veg",
            (Diet::Vegetarian, DietLabelStyle::Classic) => "Vegetarian",
            (Diet::Vegetarian, DietLabelStyle::Compact) => "Veg",
            (Diet::Jain, _) => "Jain",
            (Diet::Vegan, _) => "Vegan",
        }
    }
}

impl FromStr for Diet {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Standard" | "Non-veg" => Ok(Diet::Standard),
            "Vegetarian" | "Veg" => Ok(Diet::Vegetarian),
            "Jain" => Ok(Diet::Jain),
            "Vegan" => Ok(Diet::Vegan),
            other => Err(CoreError::InvalidInput(format!(
                "Unknown diet option: {other}"
            ))),
        }
    }
}

/// Which label set the form shows for the diet selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DietLabelStyle {
    #[default]
    Classic,
    Compact,
}

impl DietLabelStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietLabelStyle::Classic => "classic",
            DietLabelStyle::Compact => "compact",
        }
    }
}

impl From<&str> for DietLabelStyle {
    fn from(s: &str) -> Self {
        match s {
            "compact" => DietLabelStyle::Compact,
            _ => DietLabelStyle::Classic,
        }
    }
}

/// The three-valued time-budget slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TimeBudget {
    #[serde(rename = "5 min")]
    FiveMin,
    #[serde(rename = "10 min")]
    TenMin,
    #[serde(rename = "15 min")]
    FifteenMin,
}

impl TimeBudget {
    pub const ALL: [TimeBudget; 3] = [
        TimeBudget::FiveMin,
        TimeBudget::TenMin,
        TimeBudget::FifteenMin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBudget::FiveMin => "5 min",
            TimeBudget::TenMin => "10 min",
            TimeBudget::FifteenMin => "15 min",
        }
    }
}

impl FromStr for TimeBudget {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "5 min" | "5" => Ok(TimeBudget::FiveMin),
            "10 min" | "10" => Ok(TimeBudget::TenMin),
            "15 min" | "15" => Ok(TimeBudget::FifteenMin),
            other => Err(CoreError::InvalidInput(format!(
                "Unknown time budget: {other}"
            ))),
        }
    }
}

/// Output mode, resolved once at request time. Freeform returns one opaque
/// text block; structured returns the fixed-size recipe array with
/// missing-ingredient annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Freeform,
    Structured,
}

impl OutputMode {
    pub const ALL: [OutputMode; 2] = [OutputMode::Freeform, OutputMode::Structured];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Freeform => "freeform",
            OutputMode::Structured => "structured",
        }
    }
}

impl FromStr for OutputMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "freeform" => Ok(OutputMode::Freeform),
            "structured" => Ok(OutputMode::Structured),
            other => Err(CoreError::InvalidInput(format!(
                "Unknown output mode: {other}"
            ))),
        }
    }
}

/// Uploaded photo, kept as opaque bytes plus the mime type of the upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub data: Vec<u8>,
    pub mime_type: String,
}

/// One segment of the multi-part model input, in dispatch order.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptPart {
    Text(String),
    Image(ImagePayload),
}

/// Per-call options for the LLM port. A schema requests JSON-formatted
/// output constrained to it; `None` leaves the model in plain-text mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateOptions {
    pub response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct GenerateRecipesInput {
    pub mode: OutputMode,
    pub diet: Diet,
    pub max_time: TimeBudget,
    pub ingredients: Option<String>,
    pub image: Option<ImagePayload>,
}

#[derive(Debug, Clone)]
pub struct ConfirmCartInput {
    pub selected: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_parses_both_label_styles() {
        assert_eq!("Standard".parse::<Diet>().unwrap(), Diet::Standard);
        assert_eq!("Non-veg".parse::<Diet>().unwrap(), Diet::Standard);
        assert_eq!("Vegetarian".parse::<Diet>().unwrap(), Diet::Vegetarian);
        assert_eq!("Veg".parse::<Diet>().unwrap(), Diet::Vegetarian);
        assert_eq!("Jain".parse::<Diet>().unwrap(), Diet::Jain);
        assert_eq!("Vegan".parse::<Diet>().unwrap(), Diet::Vegan);
        assert!("Carnivore".parse::<Diet>().is_err());
    }

    #[test]
    fn test_diet_labels_follow_configured_style() {
        assert_eq!(Diet::Standard.label(DietLabelStyle::Classic), "Standard");
        assert_eq!(Diet::Standard.label(DietLabelStyle::Compact), "Non-veg");
        assert_eq!(Diet::Vegetarian.label(DietLabelStyle::Compact), "Veg");
        assert_eq!(Diet::Jain.label(DietLabelStyle::Compact), "Jain");
    }

    #[test]
    fn test_time_budget_round_trips_display_values() {
        for budget in TimeBudget::ALL {
            assert_eq!(budget.as_str().parse::<TimeBudget>().unwrap(), budget);
        }
        assert!("20 min".parse::<TimeBudget>().is_err());
    }

    #[test]
    fn test_output_mode_parses_wire_values() {
        assert_eq!(
            "freeform".parse::<OutputMode>().unwrap(),
            OutputMode::Freeform
        );
        assert_eq!(
            "structured".parse::<OutputMode>().unwrap(),
            OutputMode::Structured
        );
        assert!("markdown".parse::<OutputMode>().is_err());
    }
}

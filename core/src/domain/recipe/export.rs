use crate::domain::recipe::entities::{RecipeCard, RecipeOutcome};

/// Fixed name of the downloadable recipe file.
pub const EXPORT_FILENAME: &str = "bitebot_recipe.txt";

/// A rendered download: the fixed filename plus plain-text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: &'static str,
    pub content: String,
}

/// Renders an outcome as the downloadable artifact. Freeform text is
/// exported verbatim; structured results use a stable card-per-block
/// layout with the shopping cart appended last.
pub fn to_artifact(outcome: &RecipeOutcome) -> ExportArtifact {
    ExportArtifact {
        filename: EXPORT_FILENAME,
        content: render_plain_text(outcome),
    }
}

pub fn render_plain_text(outcome: &RecipeOutcome) -> String {
    match outcome {
        RecipeOutcome::Freeform { text } => text.clone(),
        RecipeOutcome::Structured { recipes, cart } => {
            let mut blocks: Vec<String> = recipes.iter().map(render_card).collect();

            if !cart.is_empty() {
                let names: Vec<&str> = cart.items.iter().map(|item| item.name.as_str()).collect();
                blocks.push(format!("Shopping cart: {}", names.join(", ")));
            }

            blocks.join("\n\n")
        }
    }
}

fn render_card(card: &RecipeCard) -> String {
    let mut lines = vec![
        format!("## {}", card.display_name),
        format!("⏱️ {}", card.time),
        format!("🛠️ {}", card.steps),
    ];

    if !card.missing_ingredients.is_empty() {
        lines.push(format!("🛒 Missing: {}", card.missing_ingredients.join(", ")));
    }

    lines.join("\n")
}

use crate::domain::recipe::value_objects::{OutputMode, TimeBudget};

/// Builds the instruction part sent ahead of the user content. The diet
/// label is interpolated exactly as the form displays it.
pub fn build_instruction(mode: OutputMode, diet_label: &str, max_time: TimeBudget) -> String {
    match mode {
        OutputMode::Freeform => format!(
            "Act as BiteBot.ai. Create a {diet_label} Indian recipe in {time}. \
             Use max 4 steps. Format: ## Dish Name, ⏱️ Time, 🛒 Ingredients, \
             🛠️ Steps, 💡 Speed-Hack.",
            time = max_time.as_str()
        ),
        OutputMode::Structured => format!(
            "Act as BiteBot.ai. Suggest exactly 3 {diet_label} Indian recipes, \
             each doable in {time} with max 4 steps. For every recipe give its \
             name, time, steps, and missing_ingredients: the ingredients it \
             needs beyond what I listed or showed you. Answer as JSON only.",
            time = max_time.as_str()
        ),
    }
}

/// Wraps the typed ingredient list as its own content part.
pub fn ingredients_part(items: &str) -> String {
    format!("Ingredients: {items}")
}

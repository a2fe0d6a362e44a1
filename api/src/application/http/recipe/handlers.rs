pub mod export_recipe;
pub mod generate_recipes;
pub mod generate_recipes_text;

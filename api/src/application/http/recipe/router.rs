use super::handlers::{
    export_recipe::{__path_export_recipe, export_recipe},
    generate_recipes::{__path_generate_recipes, generate_recipes},
    generate_recipes_text::{__path_generate_recipes_text, generate_recipes_text},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_recipes, generate_recipes_text, export_recipe))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/generate", state.args.server.root_path),
            post(generate_recipes),
        )
        .route(
            &format!("{}/recipes/generate/text", state.args.server.root_path),
            post(generate_recipes_text),
        )
        .route(
            &format!("{}/recipes/export", state.args.server.root_path),
            post(export_recipe),
        )
}

use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::GenerateRecipesTextRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use bitebot_core::domain::recipe::{
    entities::RecipeGeneration,
    ports::RecipeService,
    value_objects::{GenerateRecipesInput, OutputMode},
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipesResponse {
    pub data: RecipeGeneration,
}

#[utoipa::path(
    post,
    path = "/generate/text",
    tag = "recipe",
    summary = "Generate recipes from typed ingredients",
    description = "JSON variant of the generation endpoint for clients without a photo",
    responses(
        (status = 200, body = GenerateRecipesResponse)
    ),
    request_body = GenerateRecipesTextRequest
)]
pub async fn generate_recipes_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipesTextRequest>,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let result = state
        .service
        .generate_recipes(GenerateRecipesInput {
            mode: payload.mode.unwrap_or(OutputMode::Structured),
            diet: payload.diet,
            max_time: payload.max_time,
            ingredients: Some(payload.ingredients),
            image: None,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipesResponse { data: result }))
}

use axum::extract::{Multipart, State};

use crate::application::http::{
    recipe::handlers::generate_recipes_text::GenerateRecipesResponse,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use bitebot_core::domain::recipe::{
    ports::RecipeService,
    value_objects::{Diet, GenerateRecipesInput, ImagePayload, OutputMode, TimeBudget},
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
const ALLOWED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate recipes from a photo and/or typed ingredients",
    description = "Multipart form: optional `image` (jpeg/png), optional `ingredients` text, plus `diet`, `max_time` and `mode` fields",
    responses(
        (status = 200, body = GenerateRecipesResponse)
    ),
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let mut ingredients: Option<String> = None;
    let mut diet: Option<Diet> = None;
    let mut max_time: Option<TimeBudget> = None;
    let mut mode: Option<OutputMode> = None;
    let mut image: Option<ImagePayload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "ingredients" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read ingredients: {}", e))
                })?;
                ingredients = Some(value);
            }
            "diet" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read diet: {}", e)))?;
                diet = Some(value.parse().map_err(ApiError::from)?);
            }
            "max_time" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read max_time: {}", e)))?;
                max_time = Some(value.parse().map_err(ApiError::from)?);
            }
            "mode" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read mode: {}", e)))?;
                mode = Some(value.parse().map_err(ApiError::from)?);
            }
            "image" => {
                let mime_type = field.content_type().unwrap_or("").to_string();
                if !ALLOWED_IMAGE_TYPES.contains(&mime_type.as_str()) {
                    return Err(ApiError::BadRequest(format!(
                        "Unsupported image type: {}. Upload a jpeg or png photo",
                        mime_type
                    )));
                }

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image = Some(ImagePayload {
                    data: data.to_vec(),
                    mime_type,
                });
            }
            _ => {}
        }
    }

    let result = state
        .service
        .generate_recipes(GenerateRecipesInput {
            mode: mode.unwrap_or(OutputMode::Structured),
            diet: diet.unwrap_or(Diet::Standard),
            max_time: max_time.unwrap_or(TimeBudget::TenMin),
            ingredients,
            image,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipesResponse { data: result }))
}

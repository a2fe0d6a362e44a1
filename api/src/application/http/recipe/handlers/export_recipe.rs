use axum::http::{HeaderMap, HeaderValue, header};
use axum::{extract::State, response::IntoResponse};

use crate::application::http::{
    recipe::validators::ExportRecipeRequest,
    server::{
        api_entities::api_error::{ApiError, ValidateJson},
        app_state::AppState,
    },
};
use bitebot_core::domain::recipe::ports::RecipeService;

#[utoipa::path(
    post,
    path = "/export",
    tag = "recipe",
    summary = "Export a generation result as a text file",
    description = "Renders the outcome as plain text and answers it as a download with a fixed filename",
    responses(
        (status = 200, body = String, content_type = "text/plain")
    ),
    request_body = ExportRecipeRequest
)]
pub async fn export_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ExportRecipeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let artifact = state.service.export_recipe(&payload.outcome);

    let disposition = format!("attachment; filename=\"{}\"", artifact.filename);
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .map_err(|e| ApiError::InternalServerError(format!("Invalid header value: {}", e)))?,
    );

    Ok((headers, artifact.content))
}

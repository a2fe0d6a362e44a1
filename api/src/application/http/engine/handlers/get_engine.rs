use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use bitebot_core::domain::engine::entities::SelectedEngine;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetEngineResponse {
    pub data: SelectedEngine,
}

#[utoipa::path(
    get,
    path = "",
    tag = "engine",
    summary = "Get the engine selected at startup",
    description = "Returns the model answering generation requests, for display in the frontend caption",
    responses(
        (status = 200, body = GetEngineResponse)
    ),
)]
pub async fn get_engine(State(state): State<AppState>) -> Result<Response<GetEngineResponse>, ApiError> {
    Ok(Response::OK(GetEngineResponse {
        data: state.service.engine().clone(),
    }))
}

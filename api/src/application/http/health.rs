use axum::{Router, extract::State, routing::get};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use bitebot_core::domain::health::{entities::AppHealthStatus, ports::HealthCheckService};

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{root_path}/health"), get(health))
}

async fn health(State(state): State<AppState>) -> Result<Response<AppHealthStatus>, ApiError> {
    let status = state.service.health().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}

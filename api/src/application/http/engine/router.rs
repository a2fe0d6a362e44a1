use super::handlers::get_engine::{__path_get_engine, get_engine};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_engine))]
pub struct EngineApiDoc;

pub fn engine_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/engine", state.args.server.root_path),
        get(get_engine),
    )
}

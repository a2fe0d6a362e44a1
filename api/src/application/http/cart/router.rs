use super::handlers::confirm_cart::{__path_confirm_cart, confirm_cart};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(confirm_cart))]
pub struct CartApiDoc;

pub fn cart_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/cart/confirm", state.args.server.root_path),
        post(confirm_cart),
    )
}

use crate::application::http::{
    cart::router::CartApiDoc, engine::router::EngineApiDoc, recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BiteBot API"
    ),
    nest(
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/cart", api = CartApiDoc),
        (path = "/engine", api = EngineApiDoc),
    )
)]
pub struct ApiDoc;

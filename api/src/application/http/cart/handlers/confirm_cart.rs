use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    cart::validators::ConfirmCartRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};
use bitebot_core::domain::recipe::{
    entities::CartConfirmation, ports::CartService, value_objects::ConfirmCartInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CartConfirmationResponse {
    pub id: uuid::Uuid,
    pub selected: Vec<String>,
    pub confirmed_at: chrono::DateTime<chrono::Utc>,
}

impl From<CartConfirmation> for CartConfirmationResponse {
    fn from(confirmation: CartConfirmation) -> Self {
        Self {
            id: confirmation.id,
            selected: confirmation.selected,
            confirmed_at: confirmation.confirmed_at,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConfirmCartResponse {
    pub data: CartConfirmationResponse,
}

#[utoipa::path(
    post,
    path = "/confirm",
    tag = "cart",
    summary = "Confirm the shopping cart selection",
    description = "Checkout stub: completes the selection without placing an order or persisting anything",
    responses(
        (status = 200, body = ConfirmCartResponse)
    ),
    request_body = ConfirmCartRequest
)]
pub async fn confirm_cart(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ConfirmCartRequest>,
) -> Result<Response<ConfirmCartResponse>, ApiError> {
    let confirmation = state
        .service
        .confirm_cart(ConfirmCartInput {
            selected: payload.selected,
        })
        .map_err(ApiError::from)?;

    Ok(Response::OK(ConfirmCartResponse {
        data: CartConfirmationResponse::from(confirmation),
    }))
}

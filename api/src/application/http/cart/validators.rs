use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct ConfirmCartRequest {
    /// Names of the cart items still selected at checkout
    #[validate(length(max = 100, message = "selected may not exceed 100 items"))]
    pub selected: Vec<String>,
}

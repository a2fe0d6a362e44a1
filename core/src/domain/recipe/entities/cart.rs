use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// One entry of the aggregated shopping cart. Items start out selected and
/// are toggled by the client before checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub name: String,
    pub selected: bool,
}

impl CartItem {
    pub fn new(name: String) -> Self {
        Self {
            name,
            selected: true,
        }
    }
}

/// Shopping cart derived from one structured generation: the union of all
/// missing ingredients across the returned recipes, deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }
}

/// Receipt of the checkout stub. No order is placed and nothing is
/// persisted; the confirmation only echoes the completed selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartConfirmation {
    pub id: Uuid,
    pub selected: Vec<String>,
    pub confirmed_at: DateTime<Utc>,
}

impl CartConfirmation {
    pub fn new(selected: Vec<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            selected,
            confirmed_at: now,
        }
    }
}

//! Wire contract of the menu/order REST backend.

use serde::{Deserialize, Serialize};

use crate::dish::DishId;
use crate::order::{OrderId, OrderStatus};

pub const DISHES_PATH: &str = "/api/dishes";
pub const ORDERS_PATH: &str = "/api/orders";

pub fn dish_path(id: &DishId) -> String {
    format!("{DISHES_PATH}/{}", id.0)
}

pub fn order_path(id: &OrderId) -> String {
    format!("{ORDERS_PATH}/{}", id.0)
}

/// Response to `POST /api/orders`: either an id or an error message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of `PUT /api/orders/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

/// Error body the backend sends with non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Pull a human-readable message out of an error response body, falling
/// back to the raw text.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

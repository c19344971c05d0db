use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::order::{Order, OrderItem};

// ── Request shapes ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderItemRequest {
    pub product_id: i64,
    pub quantity: i32,
    /// Decimal price as a string to avoid floating-point issues, e.g. "9.99"
    pub unit_price: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    /// Caller-supplied business reference, unique across orders.
    pub order_ref: String,
    pub customer_id: i64,
    /// Defaults to the current time when omitted.
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
    pub items: Vec<OrderItemRequest>,
}

// ── Response shapes ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    /// Storage-assigned surrogate key; this is the id used in URLs.
    pub id: i64,
    /// The caller's business reference.
    pub order_ref: String,
    pub customer_id: i64,
    pub items: Vec<OrderItemResponse>,
    pub total_amount: String,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        OrderResponse {
            // Aggregates reaching this mapping have been through a save or a
            // repository load, so the surrogate key is always assigned.
            id: order.id.unwrap_or_default(),
            order_ref: order.order_ref.clone(),
            customer_id: order.customer_id,
            items: order.items.iter().map(OrderItemResponse::from).collect(),
            total_amount: order.total_amount.to_string(),
        }
    }
}

impl From<&OrderItem> for OrderItemResponse {
    fn from(item: &OrderItem) -> Self {
        OrderItemResponse {
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price: item.unit_price.to_string(),
        }
    }
}

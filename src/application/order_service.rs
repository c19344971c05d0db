use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use chrono::Utc;

use crate::domain::errors::DomainError;
use crate::domain::events::OrderCreatedEvent;
use crate::domain::order::{Order, OrderItem};
use crate::domain::ports::{EventPublisher, OrderRepository};

use super::dto::{CreateOrderRequest, OrderItemRequest, OrderResponse};

/// Orchestrates the four order operations: build/mutate the aggregate,
/// validate, persist, publish, map to the response shape. Holds only the
/// capability contracts, never an implementation.
#[derive(Clone)]
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self { repo, publisher }
    }

    /// Build and persist a new order, then publish `OrderCreated`.
    ///
    /// Any step failure short-circuits the rest. A publish failure is the
    /// one genuine partial-failure state: the order is already durably
    /// saved, only the event is lost, which is why it surfaces as
    /// [`DomainError::Publish`] rather than being swallowed.
    pub fn create_order(&self, request: CreateOrderRequest) -> Result<OrderResponse, DomainError> {
        let order_date = request.order_date.unwrap_or_else(Utc::now);
        let mut order = Order::new(request.order_ref, request.customer_id, order_date);
        for item in &request.items {
            let mapped = map_item(&order.order_ref, item)?;
            order.add_item(mapped);
        }

        order.validate()?;

        let id = self.repo.save(&order)?;
        order.id = Some(id);

        self.publisher.publish(&OrderCreatedEvent {
            order_id: id,
            customer_id: order.customer_id,
            total_amount: order.total_amount.clone(),
        })?;

        log::info!("created order id={} order_ref={}", id, order.order_ref);
        Ok(OrderResponse::from(&order))
    }

    pub fn get_order(&self, id: i64) -> Result<OrderResponse, DomainError> {
        let order = self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)?;
        Ok(OrderResponse::from(&order))
    }

    /// An empty store is a valid outcome: an empty vec, not an error.
    pub fn get_all_orders(&self) -> Result<Vec<OrderResponse>, DomainError> {
        let orders = self.repo.find_all()?;
        Ok(orders.iter().map(OrderResponse::from).collect())
    }

    /// Append an item to an existing order and persist the updated
    /// aggregate. The read and the save are not atomic with respect to each
    /// other; concurrent writers racing on the same order are arbitrated by
    /// the backing store alone.
    pub fn add_item_to_order(
        &self,
        id: i64,
        request: OrderItemRequest,
    ) -> Result<OrderResponse, DomainError> {
        let mut order = self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)?;

        let mapped = map_item(&order.order_ref, &request)?;
        order.add_item(mapped);
        order.validate()?;

        self.repo.save(&order)?;
        Ok(OrderResponse::from(&order))
    }
}

fn map_item(order_ref: &str, request: &OrderItemRequest) -> Result<OrderItem, DomainError> {
    let unit_price = BigDecimal::from_str(&request.unit_price).map_err(|e| {
        DomainError::Validation(format!("invalid unit_price '{}': {}", request.unit_price, e))
    })?;
    Ok(OrderItem {
        order_ref: order_ref.to_string(),
        product_id: request.product_id,
        quantity: request.quantity,
        unit_price,
    })
}

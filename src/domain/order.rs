use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

use super::errors::DomainError;

/// Child entity of [`Order`]. Items are only ever created through
/// [`Order::add_item`] and are immutable once added; there is no update or
/// remove operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    /// Business reference of the owning order.
    pub order_ref: String,
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

/// The order aggregate root.
///
/// `id` is the storage-assigned surrogate key (`None` until the first save);
/// `order_ref` is the caller-supplied business identifier. Both are
/// immutable once set. `total_amount` is derived: it always equals the sum
/// of `unit_price * quantity` over `items` and is maintained incrementally
/// by [`Order::add_item`], never set directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Option<i64>,
    pub order_ref: String,
    pub customer_id: i64,
    pub items: Vec<OrderItem>,
    pub total_amount: BigDecimal,
    pub order_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(order_ref: impl Into<String>, customer_id: i64, order_date: DateTime<Utc>) -> Self {
        Self {
            id: None,
            order_ref: order_ref.into(),
            customer_id,
            items: Vec::new(),
            total_amount: BigDecimal::from(0),
            order_date: Some(order_date),
            created_at: order_date,
            updated_at: order_date,
        }
    }

    /// Append `item` and fold its line total into `total_amount`.
    ///
    /// Performs no validation; callers run [`Order::validate`] before
    /// persisting.
    pub fn add_item(&mut self, item: OrderItem) {
        self.total_amount += &item.unit_price * BigDecimal::from(item.quantity);
        self.items.push(item);
    }

    /// Check the aggregate invariants, failing fast on the first violation.
    ///
    /// The check order is fixed (customer id, item presence, per-item
    /// quantity then price, total, order date) so error messages are
    /// deterministic for a given aggregate state.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.customer_id == 0 {
            return Err(DomainError::Validation("order has no customer id".into()));
        }
        if self.items.is_empty() {
            return Err(DomainError::Validation("order has no items".into()));
        }
        let zero = BigDecimal::from(0);
        for item in &self.items {
            if item.quantity <= 0 {
                return Err(DomainError::Validation(
                    "order item quantity must be positive".into(),
                ));
            }
            if item.unit_price <= zero {
                return Err(DomainError::Validation(
                    "order item price must be positive".into(),
                ));
            }
        }
        if self.total_amount <= zero {
            return Err(DomainError::Validation("order total must be positive".into()));
        }
        if self.order_date.is_none() {
            return Err(DomainError::Validation("order has no order date".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn item(product_id: i64, quantity: i32, unit_price: &str) -> OrderItem {
        OrderItem {
            order_ref: "ord-1".to_string(),
            product_id,
            quantity,
            unit_price: BigDecimal::from_str(unit_price).expect("valid decimal"),
        }
    }

    fn valid_order() -> Order {
        let mut order = Order::new("ord-1", 123, Utc::now());
        order.add_item(item(1, 2, "9.99"));
        order
    }

    #[test]
    fn add_item_accumulates_total() {
        let mut order = Order::new("ord-1", 123, Utc::now());
        order.add_item(item(1, 2, "9.99"));
        assert_eq!(order.total_amount, BigDecimal::from_str("19.98").unwrap());

        order.add_item(item(2, 1, "5.99"));
        assert_eq!(order.total_amount, BigDecimal::from_str("25.97").unwrap());
        assert_eq!(order.items.len(), 2);
    }

    #[test]
    fn total_is_independent_of_addition_order() {
        let mut a = Order::new("ord-1", 123, Utc::now());
        a.add_item(item(1, 3, "2.50"));
        a.add_item(item(2, 1, "10.00"));

        let mut b = Order::new("ord-1", 123, Utc::now());
        b.add_item(item(2, 1, "10.00"));
        b.add_item(item(1, 3, "2.50"));

        assert_eq!(a.total_amount, b.total_amount);
        // The item sequence itself does reflect addition order.
        assert_eq!(a.items[0].product_id, 1);
        assert_eq!(b.items[0].product_id, 2);
    }

    #[test]
    fn valid_order_passes_validation() {
        assert!(valid_order().validate().is_ok());
    }

    fn validation_message(order: &Order) -> String {
        match order.validate() {
            Err(DomainError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_zero_customer_id() {
        let mut order = valid_order();
        order.customer_id = 0;
        assert_eq!(validation_message(&order), "order has no customer id");
    }

    #[test]
    fn rejects_empty_item_list() {
        let order = Order::new("ord-1", 123, Utc::now());
        assert_eq!(validation_message(&order), "order has no items");
    }

    #[test]
    fn rejects_non_positive_quantity() {
        let mut order = valid_order();
        order.add_item(item(2, 0, "5.99"));
        assert_eq!(
            validation_message(&order),
            "order item quantity must be positive"
        );
    }

    #[test]
    fn rejects_non_positive_price() {
        let mut order = valid_order();
        order.add_item(item(2, 1, "0"));
        assert_eq!(
            validation_message(&order),
            "order item price must be positive"
        );
    }

    #[test]
    fn rejects_non_positive_total() {
        let mut order = valid_order();
        order.total_amount = BigDecimal::from(0);
        assert_eq!(validation_message(&order), "order total must be positive");
    }

    #[test]
    fn rejects_missing_order_date() {
        let mut order = valid_order();
        order.order_date = None;
        assert_eq!(validation_message(&order), "order has no order date");
    }

    #[test]
    fn customer_id_check_takes_precedence() {
        // Several rules broken at once: the first one in the check order wins.
        let mut order = Order::new("ord-1", 0, Utc::now());
        order.order_date = None;
        assert_eq!(validation_message(&order), "order has no customer id");
    }

    #[test]
    fn quantity_check_precedes_price_check_within_an_item() {
        let mut order = valid_order();
        order.add_item(item(2, -1, "0"));
        assert_eq!(
            validation_message(&order),
            "order item quantity must be positive"
        );
    }
}

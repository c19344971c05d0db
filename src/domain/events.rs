use bigdecimal::BigDecimal;

/// Emitted once per successfully created order. Ephemeral: handed to the
/// [`EventPublisher`](super::ports::EventPublisher) and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreatedEvent {
    /// Surrogate key assigned by the repository during the save.
    pub order_id: i64,
    pub customer_id: i64,
    pub total_amount: BigDecimal,
}

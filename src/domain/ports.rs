use super::errors::DomainError;
use super::events::OrderCreatedEvent;
use super::order::Order;

/// Persistence capability over the order aggregate. The service depends on
/// this trait only, never on a concrete store.
pub trait OrderRepository: Send + Sync + 'static {
    /// Durably upsert the full aggregate (root plus all current items) as
    /// one atomic operation. Assigns and returns the surrogate id on first
    /// save; returns the existing id on later saves.
    fn save(&self, order: &Order) -> Result<i64, DomainError>;

    /// `Ok(None)` on a miss, distinct from a storage failure.
    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError>;

    /// All orders in ascending surrogate-id order.
    fn find_all(&self) -> Result<Vec<Order>, DomainError>;
}

/// Event emission capability. A publish failure is surfaced to the caller
/// as an operation failure; the core never drops or retries an event.
pub trait EventPublisher: Send + Sync + 'static {
    fn publish(&self, event: &OrderCreatedEvent) -> Result<(), DomainError>;
}

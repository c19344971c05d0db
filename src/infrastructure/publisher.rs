use crate::domain::errors::DomainError;
use crate::domain::events::OrderCreatedEvent;
use crate::domain::ports::EventPublisher;

/// Production publisher: writes the event to the application log. A message
/// bus can be slotted in behind the same trait without touching the service.
pub struct LogEventPublisher;

impl EventPublisher for LogEventPublisher {
    fn publish(&self, event: &OrderCreatedEvent) -> Result<(), DomainError> {
        log::info!(
            "event published: OrderCreated order_id={} customer_id={} total_amount={}",
            event.order_id,
            event.customer_id,
            event.total_amount
        );
        Ok(())
    }
}

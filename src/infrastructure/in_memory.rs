//! In-process implementations of the order ports.
//!
//! Used by the unit tests and the HTTP-level integration tests; no database
//! or broker required.

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::errors::DomainError;
use crate::domain::events::OrderCreatedEvent;
use crate::domain::order::Order;
use crate::domain::ports::{EventPublisher, OrderRepository};

#[derive(Default)]
struct Store {
    orders: BTreeMap<i64, Order>,
    next_id: i64,
}

/// Mutex-guarded map keyed by surrogate id. Ids are assigned sequentially
/// starting at 1, mirroring the BIGSERIAL column of the real store.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    store: Mutex<Store>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> Result<std::sync::MutexGuard<'_, Store>, DomainError> {
        self.store
            .lock()
            .map_err(|e| DomainError::Persistence(format!("store lock poisoned: {}", e)))
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn save(&self, order: &Order) -> Result<i64, DomainError> {
        let mut store = self.locked()?;
        let id = match order.id {
            Some(id) => id,
            None => {
                store.next_id += 1;
                store.next_id
            }
        };
        let mut stored = order.clone();
        stored.id = Some(id);
        store.orders.insert(id, stored);
        Ok(id)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        Ok(self.locked()?.orders.get(&id).cloned())
    }

    fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.locked()?.orders.values().cloned().collect())
    }
}

/// Captures published events instead of emitting them, so tests can assert
/// on exactly what the service handed to the publisher.
#[derive(Default)]
pub struct RecordingEventPublisher {
    events: Mutex<Vec<OrderCreatedEvent>>,
}

impl RecordingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<OrderCreatedEvent> {
        self.events.lock().expect("events lock poisoned").clone()
    }
}

impl EventPublisher for RecordingEventPublisher {
    fn publish(&self, event: &OrderCreatedEvent) -> Result<(), DomainError> {
        self.events
            .lock()
            .map_err(|e| DomainError::Publish(format!("events lock poisoned: {}", e)))?
            .push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn save_assigns_sequential_ids() {
        let repo = InMemoryOrderRepository::new();

        let first = repo.save(&Order::new("ord-1", 1, Utc::now())).unwrap();
        let second = repo.save(&Order::new("ord-2", 1, Utc::now())).unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn saving_an_existing_order_overwrites_it_in_place() {
        let repo = InMemoryOrderRepository::new();

        let id = repo.save(&Order::new("ord-1", 1, Utc::now())).unwrap();
        let mut updated = repo.find_by_id(id).unwrap().expect("order should exist");
        updated.customer_id = 2;

        assert_eq!(repo.save(&updated).unwrap(), id);
        assert_eq!(repo.find_all().unwrap().len(), 1);
        assert_eq!(
            repo.find_by_id(id).unwrap().expect("order").customer_id,
            2
        );
    }
}

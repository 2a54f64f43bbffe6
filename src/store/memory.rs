use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use tokio::sync::RwLock;

use super::OrderStore;
use crate::domain::order::{NewOrder, Order, OrderError};

// ============================================================================
// In-Memory Order Store
// ============================================================================
//
// Hash-map backend with the same aggregate semantics as Postgres: ids are
// assigned on save, the creation timestamp is set once, and an order is
// stored with all of its items as one unit. Unit tests run against this
// store so they never need a database.
//
// ============================================================================

#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<i64, Order>>,
    next_id: AtomicI64,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(0),
        }
    }

    /// Number of persisted orders. Lets tests assert that a rejected
    /// creation wrote nothing.
    pub async fn len(&self) -> usize {
        self.orders.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.orders.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn save(&self, order: NewOrder) -> Result<Order, OrderError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;

        let persisted = Order {
            id,
            customer_id: order.customer_id,
            status: order.status,
            total_amount: order.total_amount,
            created_at: Utc::now(),
            items: order.items,
        };

        self.orders.write().await.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, OrderError> {
        Ok(self.orders.read().await.get(&id).cloned())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

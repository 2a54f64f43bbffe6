// ============================================================================
// Order Store - Persistence Boundary
// ============================================================================
//
// The store persists and loads the order aggregate as one unit: the order
// row together with all of its line items, never partially. Two backends:
//
// - PostgresOrderStore: the real store, one sqlx transaction per save
// - InMemoryOrderStore: test double and lightweight swap-in backend
//
// ============================================================================

mod memory;
mod postgres;

pub use memory::InMemoryOrderStore;
pub use postgres::PostgresOrderStore;

use async_trait::async_trait;

use crate::domain::order::{NewOrder, Order, OrderError};

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist the aggregate atomically. The store assigns the order
    /// identifier and creation timestamp and returns the persisted order.
    async fn save(&self, order: NewOrder) -> Result<Order, OrderError>;

    /// Load the whole aggregate, items included, or None if no order with
    /// that identifier exists. Read-only.
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, OrderError>;
}

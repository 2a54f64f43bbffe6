use async_trait::async_trait;

use crate::domain::order::{ItemRequest, OrderError};

// ============================================================================
// Stock Reservation - Inventory Collaborator Boundary
// ============================================================================
//
// Checks the full requested item set against available stock. The mock
// enforces a fixed per-item quantity ceiling and reserves nothing; a real
// inventory client replaces it behind the same trait.
//
// ============================================================================

#[async_trait]
pub trait StockReservation: Send + Sync {
    /// Reserve stock for every requested item, or fail with
    /// `OrderError::InsufficientStock` without reserving anything.
    async fn reserve(&self, items: &[ItemRequest]) -> Result<(), OrderError>;
}

/// Mock reservation: any single item requesting more than
/// `MAX_QUANTITY_PER_ITEM` units is treated as out of stock.
pub struct MockStockReservation;

impl MockStockReservation {
    pub const MAX_QUANTITY_PER_ITEM: i32 = 100;
}

#[async_trait]
impl StockReservation for MockStockReservation {
    async fn reserve(&self, items: &[ItemRequest]) -> Result<(), OrderError> {
        for item in items {
            if item.quantity > Self::MAX_QUANTITY_PER_ITEM {
                return Err(OrderError::InsufficientStock {
                    product_id: item.product_id,
                    quantity: item.quantity,
                });
            }
        }

        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

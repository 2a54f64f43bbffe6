use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::errors::OrderError;
use super::value_objects::{ItemRequest, OrderItem, OrderStatus};

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================
//
// The order and its line items form one aggregate: they are built together,
// persisted together in one transaction, and loaded together. There are no
// partial loads and no item that outlives its order.
//
// ============================================================================

/// An order that has not been persisted yet. The store assigns the
/// identifier and creation timestamp on save.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_id: i64,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub items: Vec<OrderItem>,
}

/// A persisted order as read back from the store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl NewOrder {
    /// Build a Pending order from priced line items. The total is the exact
    /// decimal sum of every line subtotal.
    pub fn pending(customer_id: i64, items: Vec<OrderItem>) -> Self {
        let total_amount = items
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc + item.subtotal());

        Self {
            customer_id,
            status: OrderStatus::Pending,
            total_amount,
            items,
        }
    }
}

/// Validate requested items before pricing: the list must be non-empty and
/// every quantity at least 1.
pub fn validate_requested_items(items: &[ItemRequest]) -> Result<(), OrderError> {
    if items.is_empty() {
        return Err(OrderError::EmptyItems);
    }

    for item in items {
        if item.quantity < 1 {
            return Err(OrderError::InvalidQuantity(item.quantity));
        }
    }

    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================

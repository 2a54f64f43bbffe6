// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order not found with ID: {0}")]
    NotFound(i64),

    #[error("Order items cannot be empty")]
    EmptyItems,

    #[error("Invalid item quantity: {0}")]
    InvalidQuantity(i32),

    #[error("Insufficient stock for product {product_id}: requested {quantity}")]
    InsufficientStock { product_id: i64, quantity: i32 },

    #[error("Storage error: {0}")]
    Storage(#[source] anyhow::Error),
}

impl OrderError {
    /// Stable label for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderError::NotFound(_) => "not_found",
            OrderError::EmptyItems => "empty_items",
            OrderError::InvalidQuantity(_) => "invalid_quantity",
            OrderError::InsufficientStock { .. } => "insufficient_stock",
            OrderError::Storage(_) => "storage",
        }
    }
}

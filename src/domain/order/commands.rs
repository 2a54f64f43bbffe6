use serde::{Deserialize, Serialize};

use super::value_objects::ItemRequest;

// ============================================================================
// Order Commands
// ============================================================================

/// Request to create a new order for a customer. Items are priced and
/// validated by the service; the caller supplies only product/quantity.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateOrder {
    pub customer_id: i64,
    pub items: Vec<ItemRequest>,
}

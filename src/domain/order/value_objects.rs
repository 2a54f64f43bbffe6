use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================

/// One requested product/quantity pair, before pricing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ItemRequest {
    pub product_id: i64,
    pub quantity: i32,
}

/// A priced line item belonging to exactly one order. The unit price is
/// captured at order-creation time and never recomputed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderItem {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl OrderItem {
    /// Exact line subtotal: unit_price * quantity.
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Stable textual form, used both on the wire and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Paid => "PAID",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(OrderStatus::Pending),
            "PAID" => Ok(OrderStatus::Paid),
            "SHIPPED" => Ok(OrderStatus::Shipped),
            "COMPLETED" => Ok(OrderStatus::Completed),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status: {}", other)),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_item_subtotal_is_exact() {
        let item = OrderItem {
            product_id: 3,
            quantity: 7,
            unit_price: dec!(1300),
        };

        assert_eq!(item.subtotal(), dec!(9100));
    }

    #[test]
    fn test_order_item_serialization() {
        let item = OrderItem {
            product_id: 1,
            quantity: 2,
            unit_price: dec!(1100),
        };

        let json = serde_json::to_string(&item).unwrap();
        let deserialized: OrderItem = serde_json::from_str(&json).unwrap();

        assert_eq!(item, deserialized);
    }

    #[test]
    fn test_status_wire_form_is_upper_case() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
    }

    #[test]
    fn test_status_text_round_trip() {
        let statuses = vec![
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Shipped,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ];

        for status in statuses {
            let parsed: OrderStatus = status.as_str().parse().unwrap();
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn test_unknown_status_text_is_rejected() {
        assert!("pending".parse::<OrderStatus>().is_err());
        assert!("REFUNDED".parse::<OrderStatus>().is_err());
    }
}

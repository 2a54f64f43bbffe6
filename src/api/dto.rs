use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order::{CreateOrder, ItemRequest, Order, OrderStatus};

// ============================================================================
// Wire DTOs
// ============================================================================
//
// JSON field names are camelCase on the wire; domain types stay snake_case.
//
// ============================================================================

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_id: i64,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: i64,
    pub quantity: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: i64,
    pub customer_id: i64,
    pub status: OrderStatus,
    pub total_amount: Decimal,
    pub items: Vec<OrderItemResponse>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl From<CreateOrderRequest> for CreateOrder {
    fn from(request: CreateOrderRequest) -> Self {
        CreateOrder {
            customer_id: request.customer_id,
            items: request
                .items
                .into_iter()
                .map(|item| ItemRequest {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        OrderResponse {
            order_id: order.id,
            customer_id: order.customer_id,
            status: order.status,
            total_amount: order.total_amount,
            items: order
                .items
                .into_iter()
                .map(|item| OrderItemResponse {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
                .collect(),
            created_at: order.created_at,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderItem;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_deserializes_camel_case() {
        let json = r#"{"customerId": 100, "items": [{"productId": 1, "quantity": 2}]}"#;
        let request: CreateOrderRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.customer_id, 100);
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].product_id, 1);
        assert_eq!(request.items[0].quantity, 2);
    }

    #[test]
    fn test_request_maps_to_create_command() {
        let request = CreateOrderRequest {
            customer_id: 7,
            items: vec![OrderItemRequest {
                product_id: 3,
                quantity: 4,
            }],
        };

        let command: CreateOrder = request.into();
        assert_eq!(command.customer_id, 7);
        assert_eq!(
            command.items,
            vec![ItemRequest {
                product_id: 3,
                quantity: 4
            }]
        );
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let order = Order {
            id: 1,
            customer_id: 100,
            status: OrderStatus::Pending,
            total_amount: dec!(3400),
            created_at: Utc::now(),
            items: vec![OrderItem {
                product_id: 1,
                quantity: 2,
                unit_price: dec!(1100),
            }],
        };

        let json = serde_json::to_string(&OrderResponse::from(order)).unwrap();

        assert!(json.contains("\"orderId\":1"));
        assert!(json.contains("\"customerId\":100"));
        assert!(json.contains("\"status\":\"PENDING\""));
        assert!(json.contains("\"totalAmount\":\"3400\""));
        assert!(json.contains("\"productId\":1"));
        assert!(json.contains("\"unitPrice\":\"1100\""));
        assert!(json.contains("\"createdAt\""));
    }

    #[test]
    fn test_response_preserves_item_order() {
        let order = Order {
            id: 1,
            customer_id: 1,
            status: OrderStatus::Pending,
            total_amount: dec!(0),
            created_at: Utc::now(),
            items: (1..=3)
                .map(|i| OrderItem {
                    product_id: i,
                    quantity: 1,
                    unit_price: dec!(1000),
                })
                .collect(),
        };

        let response = OrderResponse::from(order);
        let ids: Vec<i64> = response.items.iter().map(|i| i.product_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgPool;
use sqlx::Row;

use super::OrderStore;
use crate::domain::order::{NewOrder, Order, OrderError, OrderItem, OrderStatus};

// ============================================================================
// Postgres Order Store
// ============================================================================
//
// One transaction per save: the order row and every line item are written
// together or not at all. Identifiers and the creation timestamp come from
// the database (BIGSERIAL / now()).
//
// ============================================================================

pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage(e: sqlx::Error) -> OrderError {
    OrderError::Storage(e.into())
}

#[async_trait::async_trait]
impl OrderStore for PostgresOrderStore {
    async fn save(&self, order: NewOrder) -> Result<Order, OrderError> {
        let mut tx = self.pool.begin().await.map_err(storage)?;

        let row = sqlx::query(
            "INSERT INTO orders (customer_id, status, total_amount) \
             VALUES ($1, $2, $3) \
             RETURNING id, created_at",
        )
        .bind(order.customer_id)
        .bind(order.status.as_str())
        .bind(order.total_amount)
        .fetch_one(&mut *tx)
        .await
        .map_err(storage)?;

        let id: i64 = row.try_get("id").map_err(storage)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(storage)?;

        for item in &order.items {
            sqlx::query(
                "INSERT INTO order_items (order_id, product_id, quantity, unit_price) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(item.unit_price)
            .execute(&mut *tx)
            .await
            .map_err(storage)?;
        }

        tx.commit().await.map_err(storage)?;

        tracing::info!(
            order_id = id,
            customer_id = order.customer_id,
            item_count = order.items.len(),
            "order persisted"
        );

        Ok(Order {
            id,
            customer_id: order.customer_id,
            status: order.status,
            total_amount: order.total_amount,
            created_at,
            items: order.items,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, OrderError> {
        let order_row = sqlx::query(
            "SELECT id, customer_id, status, total_amount, created_at \
             FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;

        let Some(order_row) = order_row else {
            return Ok(None);
        };

        let status_text: String = order_row.try_get("status").map_err(storage)?;
        let status: OrderStatus = status_text
            .parse()
            .map_err(|e: String| OrderError::Storage(anyhow::anyhow!(e)))?;

        let item_rows = sqlx::query(
            "SELECT product_id, quantity, unit_price \
             FROM order_items WHERE order_id = $1 \
             ORDER BY id ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?;

        let mut items = Vec::with_capacity(item_rows.len());
        for row in item_rows {
            items.push(OrderItem {
                product_id: row.try_get("product_id").map_err(storage)?,
                quantity: row.try_get("quantity").map_err(storage)?,
                unit_price: row.try_get::<Decimal, _>("unit_price").map_err(storage)?,
            });
        }

        Ok(Some(Order {
            id: order_row.try_get("id").map_err(storage)?,
            customer_id: order_row.try_get("customer_id").map_err(storage)?,
            status,
            total_amount: order_row.try_get("total_amount").map_err(storage)?,
            created_at: order_row.try_get("created_at").map_err(storage)?,
            items,
        }))
    }
}

// ============================================================================
// Integration Test Notes
// ============================================================================
//
// The Postgres store requires a live database and is covered by integration
// testing rather than unit tests:
//
// - save writes order + items in one transaction (rollback on any failure)
// - RETURNING id / created_at round-trips through the aggregate
// - find_by_id loads items in insertion order
// - ON DELETE CASCADE removes items with their order
//
// Unit-level behavior (status text mapping, error classification) is tested
// in the domain and store::memory modules against the same trait.
//
// ============================================================================

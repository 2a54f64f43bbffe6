use std::sync::Arc;
use std::time::Instant;

use crate::audit::{AuditEvent, AuditSink};
use crate::inventory::StockReservation;
use crate::metrics::Metrics;
use crate::pricing::PriceLookup;
use crate::store::OrderStore;

use super::aggregate::{validate_requested_items, NewOrder, Order};
use super::commands::CreateOrder;
use super::errors::OrderError;
use super::value_objects::OrderItem;

// ============================================================================
// Order Service
// ============================================================================
//
// Orchestrates: validate -> price -> total -> reserve stock -> persist ->
// audit. All collaborators are injected through the constructor; the service
// holds no ambient state.
//
// The persistence write is the one atomic boundary: either the order and all
// of its line items land together, or nothing is written. A stock rejection
// happens before the store is touched, so it can never leave partial state.
//
// ============================================================================

pub struct OrderService {
    store: Arc<dyn OrderStore>,
    pricing: Arc<dyn PriceLookup>,
    inventory: Arc<dyn StockReservation>,
    audit: Arc<dyn AuditSink>,
    metrics: Arc<Metrics>,
}

impl OrderService {
    pub fn new(
        store: Arc<dyn OrderStore>,
        pricing: Arc<dyn PriceLookup>,
        inventory: Arc<dyn StockReservation>,
        audit: Arc<dyn AuditSink>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            store,
            pricing,
            inventory,
            audit,
            metrics,
        }
    }

    /// Create and persist a new Pending order.
    pub async fn create_order(&self, command: CreateOrder) -> Result<Order, OrderError> {
        let started = Instant::now();

        tracing::info!(
            customer_id = command.customer_id,
            item_count = command.items.len(),
            "starting order creation"
        );

        let result = self.create_order_inner(command).await;

        match &result {
            Ok(order) => {
                self.metrics.record_order_created(started.elapsed().as_secs_f64());
                tracing::info!(order_id = order.id, total_amount = %order.total_amount, "order created");
            }
            Err(e) => {
                self.metrics.record_order_rejected(e.kind());
                tracing::warn!(reason = e.kind(), error = %e, "order creation failed");
            }
        }

        result
    }

    async fn create_order_inner(&self, command: CreateOrder) -> Result<Order, OrderError> {
        validate_requested_items(&command.items)?;

        // Price every requested item, capturing the unit price as of now
        let mut items = Vec::with_capacity(command.items.len());
        for request in &command.items {
            let unit_price = self.pricing.unit_price(request.product_id).await;
            items.push(OrderItem {
                product_id: request.product_id,
                quantity: request.quantity,
                unit_price,
            });
        }

        // Reservation failure aborts before anything is persisted
        self.inventory.reserve(&command.items).await?;

        let order = NewOrder::pending(command.customer_id, items);
        let saved = self.store.save(order).await?;

        // Fire-and-forget audit record, not part of the return contract
        self.audit
            .record(AuditEvent::order_created(saved.id, saved.total_amount));

        Ok(saved)
    }

    /// Fetch a persisted order by identifier. Read-only.
    pub async fn get_order(&self, order_id: i64) -> Result<Order, OrderError> {
        match self.store.find_by_id(order_id).await? {
            Some(order) => {
                self.metrics.record_order_lookup(true);
                Ok(order)
            }
            None => {
                self.metrics.record_order_lookup(false);
                Err(OrderError::NotFound(order_id))
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Audit Sink - Structured Audit Records
// ============================================================================
//
// Fire-and-forget: the order flow emits a record and moves on, no
// acknowledgment is awaited. The tracing-backed sink writes the record as a
// JSON log line; a real shipper (Logstash etc.) would replace it behind the
// same trait.
//
// ============================================================================

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AuditEvent {
    pub event_id: Uuid,
    pub event: AuditEventKind,
    pub order_id: i64,
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventKind {
    OrderCreated,
}

impl AuditEvent {
    pub fn order_created(order_id: i64, amount: Decimal) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event: AuditEventKind::OrderCreated,
            order_id,
            amount,
            timestamp: Utc::now(),
        }
    }
}

pub trait AuditSink: Send + Sync {
    fn record(&self, event: AuditEvent);
}

/// Emits audit records as structured JSON through the `audit` log target.
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, event: AuditEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => {
                tracing::info!(target: "audit", order_id = event.order_id, %json, "audit record");
            }
            Err(e) => {
                // Fire-and-forget: a serialization failure must never fail the order
                tracing::error!(target: "audit", error = %e, "failed to serialize audit record");
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

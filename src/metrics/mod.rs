use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry};

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Order creation outcomes (created vs rejected, by reason)
// - Order lookups (hit vs miss)
// - Order creation latency
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Central metrics registry for the entire application
pub struct Metrics {
    registry: Registry,

    pub orders_created: IntCounter,
    pub orders_rejected: IntCounterVec,
    pub order_lookups: IntCounterVec,
    pub order_create_duration: Histogram,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let orders_created = IntCounter::new(
            "orders_created_total",
            "Total orders successfully created",
        )?;
        registry.register(Box::new(orders_created.clone()))?;

        let orders_rejected = IntCounterVec::new(
            Opts::new("orders_rejected_total", "Total order creations rejected"),
            &["reason"],
        )?;
        registry.register(Box::new(orders_rejected.clone()))?;

        let order_lookups = IntCounterVec::new(
            Opts::new("order_lookups_total", "Total order lookups by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(order_lookups.clone()))?;

        let order_create_duration = Histogram::with_opts(
            HistogramOpts::new(
                "order_create_duration_seconds",
                "Order creation duration, request to commit",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
        )?;
        registry.register(Box::new(order_create_duration.clone()))?;

        Ok(Self {
            registry,
            orders_created,
            orders_rejected,
            order_lookups,
            order_create_duration,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record a successful order creation
    pub fn record_order_created(&self, duration_secs: f64) {
        self.orders_created.inc();
        self.order_create_duration.observe(duration_secs);
    }

    /// Helper to record a rejected order creation
    pub fn record_order_rejected(&self, reason: &str) {
        self.orders_rejected.with_label_values(&[reason]).inc();
    }

    /// Helper to record a lookup outcome
    pub fn record_order_lookup(&self, found: bool) {
        let outcome = if found { "found" } else { "not_found" };
        self.order_lookups.with_label_values(&[outcome]).inc();
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new().expect("Failed to create metrics")
    }
}

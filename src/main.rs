use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod audit;
mod config;
mod domain;
mod inventory;
mod metrics;
mod pricing;
mod store;

use api::AppState;
use audit::TracingAuditSink;
use config::AppConfig;
use domain::order::OrderService;
use inventory::MockStockReservation;
use pricing::MockPriceLookup;
use store::PostgresOrderStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_management=debug")),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(bind = %config.bind_addr, port = config.port, "starting order-management service");

    // === 1. Database pool + migrations ===
    tracing::info!("connecting to Postgres");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    // === 2. Metrics registry ===
    let metrics = Arc::new(metrics::Metrics::new()?);

    // === 3. Explicit wiring: store + mock collaborators into the service ===
    // Pricing and stock reservation are deterministic mocks standing in for
    // real integrations behind the same traits.
    let service = Arc::new(OrderService::new(
        Arc::new(PostgresOrderStore::new(pool)),
        Arc::new(MockPriceLookup),
        Arc::new(MockStockReservation),
        Arc::new(TracingAuditSink),
        metrics.clone(),
    ));

    // === 4. HTTP server ===
    let state = web::Data::new(AppState { service, metrics });
    let bind = (config.bind_addr.clone(), config.port);

    tracing::info!("listening on http://{}:{}", bind.0, bind.1);
    HttpServer::new(move || App::new().app_data(state.clone()).configure(api::routes))
        .bind(bind)?
        .run()
        .await?;

    Ok(())
}

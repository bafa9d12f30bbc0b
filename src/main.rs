use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;
mod domain;
mod metrics;
mod store;

use config::{AppConfig, StoreBackend};
use domain::customer::CustomerService;
use store::{CustomerStore, InMemoryCustomerStore, ScyllaCustomerStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging, INFO by default, override with RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,customer_api=debug"))
        )
        .init();

    tracing::info!("🚀 Starting Customer API");

    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    // === 1. Customer store ===
    let store: Arc<dyn CustomerStore> = match config.store {
        StoreBackend::Scylla => Arc::new(
            ScyllaCustomerStore::connect(&config.scylla_nodes, &config.scylla_keyspace).await?,
        ),
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory customer store; data is lost on restart");
            Arc::new(InMemoryCustomerStore::new())
        }
    };

    // === 2. Service and metrics ===
    let service = CustomerService::new(store);
    let metrics = metrics::Metrics::new()?;

    // === 3. HTTP server ===
    api::start_server(config.socket_addr(), service, metrics).await?;

    tracing::info!("👋 Customer API stopped");
    Ok(())
}

//! # rotcoold: rotcool daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Assemble the cooling process once; a failure stops the daemon before
//!   it ever serves a request
//! - Publish a first status snapshot, then keep it fresh in the background
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use rotcool_adapter_http_axum::state::AppState;
use rotcool_adapter_storage_sqlite_sqlx::{
    Config as DbConfig, SqliteEquipmentStatusRepository, SqliteZoneConfigRepository,
};
use rotcool_app::notification_bus::InProcessNotificationBus;
use rotcool_app::services::status_aggregator::StatusAggregator;
use rotcool_app::services::status_poller::StatusPoller;
use rotcool_app::services::status_publisher::StatusPublisher;
use rotcool_app::services::zone_assembler::ZoneAssembler;
use rotcool_domain::layout::PlantLayout;
use rotcool_domain::process::CoolingProcess;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = DbConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .inspect_err(|err| tracing::error!(error = %err, "failed to open plant database"))?;
    let pool = db.pool().clone();

    // Repositories
    let zone_repo = SqliteZoneConfigRepository::new(
        pool.clone(),
        config.plant.area_id.as_str(),
        config.plant.center_id.as_str(),
    );
    let status_repo = SqliteEquipmentStatusRepository::new(pool);

    // Notification bus
    let notifications = Arc::new(InProcessNotificationBus::new(256));

    // Startup assembly
    let assembler = ZoneAssembler::new(zone_repo, Arc::clone(&notifications));
    let process = assembler
        .assemble_process(config.plant.expected_zone_count)
        .await
        .inspect_err(|err| {
            tracing::error!(error = %err, "cooling process assembly failed, not starting");
        })?;
    log_zone_summary(&process, &PlantLayout::reference());

    // Status
    let aggregator = Arc::new(StatusAggregator::new(
        status_repo,
        Arc::clone(&notifications),
    ));
    let publisher = Arc::new(StatusPublisher::new());
    let poller = StatusPoller::new(
        Arc::clone(&aggregator),
        Arc::clone(&publisher),
        config.poll_interval(),
    );
    poller.poll_once().await;
    let poller_handle = poller.spawn();

    // HTTP
    let state = AppState::new(process, publisher, notifications);
    let app = rotcool_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "rotcoold listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    poller_handle.abort();
    db.close().await;
    tracing::info!("rotcoold stopped");

    Ok(())
}

fn log_zone_summary(process: &CoolingProcess, layout: &PlantLayout) {
    for zone in process.zones() {
        let spec = zone.spec();
        let banks = layout
            .range(zone.zone_type())
            .map(|range| format!("{}..={}", range.first_bank, range.last_bank));
        tracing::info!(
            zone_no = spec.zone_no,
            zone_type = %zone.zone_type(),
            zone_id = %spec.zone_id,
            num_units = spec.num_units,
            length = spec.length,
            width = spec.width,
            banks = banks.as_deref().unwrap_or("unmapped"),
            "zone configured"
        );
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

//! SalonOps API Server
//!
//! Main entry point for the SalonOps forecasting and project cost service.

use anyhow::Context;
use sea_orm_migration::MigratorTrait;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use salonops_api::{AppState, create_router};
use salonops_core::forecast::RiskThresholds;
use salonops_db::{Migrator, connect};
use salonops_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "salonops=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database
    let db = connect(&config.database.url, config.database.max_connections).await?;
    info!(url = %config.database.url, "Connected to database");

    Migrator::up(&db, None).await.context("Failed to run migrations")?;
    info!("Migrations applied");

    let thresholds = RiskThresholds::DEFAULT.with_overrides(
        config.forecast.labor_pct_threshold,
        config.forecast.net_margin_threshold,
    );
    info!(
        max_labor_pct = %thresholds.max_labor_pct,
        min_net_margin = %thresholds.min_net_margin,
        "Risk thresholds configured"
    );

    // Create router
    let app = create_router(AppState::new(db).with_thresholds(thresholds));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

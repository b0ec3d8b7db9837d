//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for fixed costs, forecasts, and project costs
//! - JSON error responses derived from `AppError`

pub mod routes;

use axum::Router;
use salonops_core::forecast::RiskThresholds;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// Risk thresholds applied to every forecast.
    pub thresholds: RiskThresholds,
}

impl AppState {
    /// Creates state with the built-in risk thresholds.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db: Arc::new(db),
            thresholds: RiskThresholds::DEFAULT,
        }
    }

    /// Replaces the risk thresholds.
    #[must_use]
    pub const fn with_thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

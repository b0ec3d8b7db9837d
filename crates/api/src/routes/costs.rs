//! Fixed costs routes.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{error, info};

use super::error_response;
use crate::AppState;
use salonops_core::{FixedCostLine, FixedCostsConfiguration};
use salonops_db::{FixedCostsRepository, RepositoryError};
use salonops_shared::AppError;

/// Creates the fixed costs routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/costs", get(get_costs).post(update_costs))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Fixed costs with their derived monthly total.
#[derive(Debug, Serialize)]
pub struct FixedCostsResponse {
    /// Every line item.
    #[serde(flatten)]
    pub fixed_costs: FixedCostsConfiguration,
    /// Sum of every line item.
    pub total_monthly_fixed_costs: Decimal,
}

impl From<FixedCostsConfiguration> for FixedCostsResponse {
    fn from(fixed_costs: FixedCostsConfiguration) -> Self {
        Self {
            total_monthly_fixed_costs: fixed_costs.total_monthly_fixed_costs(),
            fixed_costs,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/costs` - Stored fixed costs, or all zeros before the first save.
async fn get_costs(State(state): State<AppState>) -> impl IntoResponse {
    let repo = FixedCostsRepository::new((*state.db).clone());

    match repo.get_or_default().await {
        Ok(config) => (StatusCode::OK, Json(FixedCostsResponse::from(config))).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to load fixed costs");
            map_repository_error(e)
        }
    }
}

/// POST `/costs` - Overwrite the given lines, keeping every other line.
async fn update_costs(
    State(state): State<AppState>,
    Json(payload): Json<BTreeMap<FixedCostLine, Decimal>>,
) -> impl IntoResponse {
    let repo = FixedCostsRepository::new((*state.db).clone());

    let current = match repo.get_or_default().await {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load fixed costs");
            return map_repository_error(e);
        }
    };

    let merged = current.with_overrides(&payload);
    if let Err(e) = merged.validate() {
        return error_response(&AppError::from(e));
    }

    match repo.save(&merged).await {
        Ok(saved) => {
            info!(
                lines_changed = payload.len(),
                total = %saved.total_monthly_fixed_costs(),
                "Fixed costs updated"
            );
            (StatusCode::OK, Json(FixedCostsResponse::from(saved))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to save fixed costs");
            map_repository_error(e)
        }
    }
}

// ============================================================================
// Error Mapping
// ============================================================================

/// Maps repository errors to HTTP responses.
fn map_repository_error(e: RepositoryError) -> Response {
    error_response(&AppError::from(e))
}

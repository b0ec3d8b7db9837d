//! Forecast routes.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use tracing::{error, info, warn};

use super::error_response;
use crate::AppState;
use salonops_core::forecast::{ForecastEngine, OperationalInputs, validate_inputs};
use salonops_db::FixedCostsRepository;
use salonops_shared::AppError;

/// Creates the forecast routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/forecast", post(run_forecast))
}

/// POST `/forecast` - Project one month from the given operational inputs.
///
/// Missing input fields take their reference defaults. Fixed costs come from
/// storage, or all zeros before the first save.
async fn run_forecast(
    State(state): State<AppState>,
    Json(inputs): Json<OperationalInputs>,
) -> impl IntoResponse {
    if let Err(e) = validate_inputs(&inputs) {
        warn!(error = %e, "Rejected forecast inputs");
        return error_response(&AppError::from(e));
    }

    let fixed_costs = match FixedCostsRepository::new((*state.db).clone())
        .get_or_default()
        .await
    {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load fixed costs");
            return error_response(&AppError::from(e));
        }
    };

    let snapshot = ForecastEngine::with_thresholds(state.thresholds).forecast(&inputs, &fixed_costs);

    if snapshot.risk_flags.any() {
        info!(
            net_profit = %snapshot.net_profit,
            negative_cash_flow = snapshot.risk_flags.negative_cash_flow,
            labor_too_high = snapshot.risk_flags.labor_too_high,
            margin_too_low = snapshot.risk_flags.margin_too_low,
            "Forecast raised risk flags"
        );
    }

    (StatusCode::OK, Json(snapshot)).into_response()
}

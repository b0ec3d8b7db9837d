//! Project summary route.

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use tracing::{error, warn};

use super::error_response;
use crate::AppState;
use salonops_core::project::{ProjectSummaryAggregator, orphaned_items};
use salonops_db::{CategoryRepository, CostItemFilter, CostItemRepository};
use salonops_shared::AppError;

/// Creates the project summary routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/project-summary", get(get_project_summary))
}

/// GET `/project-summary` - Budget versus actual for every category.
///
/// Items whose category was deleted are left out of every total and logged.
async fn get_project_summary(State(state): State<AppState>) -> impl IntoResponse {
    let categories = match CategoryRepository::new((*state.db).clone()).list().await {
        Ok(categories) => categories,
        Err(e) => {
            error!(error = %e, "Failed to list categories");
            return error_response(&AppError::from(e));
        }
    };

    let items = match CostItemRepository::new((*state.db).clone())
        .list(CostItemFilter::default())
        .await
    {
        Ok(items) => items,
        Err(e) => {
            error!(error = %e, "Failed to list cost items");
            return error_response(&AppError::from(e));
        }
    };

    for orphan in orphaned_items(&categories, &items) {
        warn!(
            item_id = %orphan.id,
            category_id = %orphan.category_id,
            amount = %orphan.amount,
            "Cost item references a missing category; excluded from summary"
        );
    }

    let summary = ProjectSummaryAggregator::new().summarize(&categories, &items);
    (StatusCode::OK, Json(summary)).into_response()
}

//! Project cost item routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use super::error_response;
use crate::AppState;
use salonops_core::project::{CostItemUpdate, CostStatus, NewCostItem};
use salonops_db::{CostItemFilter, CostItemRepository, RepositoryError};
use salonops_shared::{
    AppError,
    types::{CategoryId, CostItemId},
};

/// Creates the cost item routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cost-items", get(list_cost_items).post(create_cost_item))
        .route(
            "/cost-items/{item_id}",
            get(get_cost_item)
                .put(update_cost_item)
                .delete(delete_cost_item),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing cost items.
#[derive(Debug, Default, Deserialize)]
pub struct ListCostItemsQuery {
    /// Only items in this category.
    pub category_id: Option<CategoryId>,
    /// Only items with this status.
    pub status: Option<String>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/cost-items` - List cost items, optionally by category and status.
async fn list_cost_items(
    State(state): State<AppState>,
    Query(query): Query<ListCostItemsQuery>,
) -> impl IntoResponse {
    let status = match query.status.as_deref().map(str::parse::<CostStatus>).transpose() {
        Ok(status) => status,
        Err(e) => return error_response(&AppError::from(e)),
    };

    let repo = CostItemRepository::new((*state.db).clone());
    let filter = CostItemFilter {
        category_id: query.category_id,
        status,
    };

    match repo.list(filter).await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list cost items");
            map_cost_item_error(e)
        }
    }
}

/// GET `/cost-items/{item_id}` - Fetch one cost item.
async fn get_cost_item(
    State(state): State<AppState>,
    Path(item_id): Path<CostItemId>,
) -> impl IntoResponse {
    let repo = CostItemRepository::new((*state.db).clone());

    match repo.find_by_id(item_id).await {
        Ok(Some(item)) => (StatusCode::OK, Json(item)).into_response(),
        Ok(None) => map_cost_item_error(RepositoryError::CostItemNotFound(item_id)),
        Err(e) => {
            error!(error = %e, "Failed to get cost item");
            map_cost_item_error(e)
        }
    }
}

/// POST `/cost-items` - Record a cost item under an existing category.
async fn create_cost_item(
    State(state): State<AppState>,
    Json(payload): Json<NewCostItem>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return error_response(&AppError::from(e));
    }

    let repo = CostItemRepository::new((*state.db).clone());

    match repo.create(payload).await {
        Ok(item) => {
            info!(
                item_id = %item.id,
                category_id = %item.category_id,
                amount = %item.amount,
                status = %item.status,
                "Cost item created"
            );
            (StatusCode::CREATED, Json(item)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create cost item");
            map_cost_item_error(e)
        }
    }
}

/// PUT `/cost-items/{item_id}` - Partially update a cost item.
async fn update_cost_item(
    State(state): State<AppState>,
    Path(item_id): Path<CostItemId>,
    Json(payload): Json<CostItemUpdate>,
) -> impl IntoResponse {
    let repo = CostItemRepository::new((*state.db).clone());

    let merged = match repo.find_by_id(item_id).await {
        Ok(Some(existing)) => payload.apply_to(&existing),
        Ok(None) => return map_cost_item_error(RepositoryError::CostItemNotFound(item_id)),
        Err(e) => {
            error!(error = %e, "Failed to find cost item");
            return map_cost_item_error(e);
        }
    };
    if let Err(e) = merged.validate() {
        return error_response(&AppError::from(e));
    }

    match repo.update(item_id, payload).await {
        Ok(item) => {
            info!(item_id = %item.id, status = %item.status, "Cost item updated");
            (StatusCode::OK, Json(item)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to update cost item");
            map_cost_item_error(e)
        }
    }
}

/// DELETE `/cost-items/{item_id}` - Delete a cost item.
async fn delete_cost_item(
    State(state): State<AppState>,
    Path(item_id): Path<CostItemId>,
) -> impl IntoResponse {
    let repo = CostItemRepository::new((*state.db).clone());

    match repo.delete(item_id).await {
        Ok(()) => {
            info!(item_id = %item_id, "Cost item deleted");
            (StatusCode::OK, Json(json!({ "ok": true }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to delete cost item");
            map_cost_item_error(e)
        }
    }
}

// ============================================================================
// Error Mapping
// ============================================================================

/// Maps cost item repository errors to HTTP responses.
///
/// A missing item, or a missing category on create or update, is a 404.
fn map_cost_item_error(e: RepositoryError) -> Response {
    error_response(&AppError::from(e))
}

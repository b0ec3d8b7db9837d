//! Project cost category routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
};
use serde_json::json;
use tracing::{error, info};

use super::error_response;
use crate::AppState;
use salonops_core::project::{CategoryUpdate, NewCostCategory};
use salonops_db::{CategoryRepository, RepositoryError};
use salonops_shared::{AppError, types::CategoryId};

/// Creates the category routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{category_id}",
            put(update_category).delete(delete_category),
        )
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/categories` - List categories by sort order.
async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    let repo = CategoryRepository::new((*state.db).clone());

    match repo.list().await {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list categories");
            map_category_error(e)
        }
    }
}

/// POST `/categories` - Create a category.
async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<NewCostCategory>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return error_response(&AppError::from(e));
    }

    let repo = CategoryRepository::new((*state.db).clone());

    match repo.create(payload).await {
        Ok(category) => {
            info!(
                category_id = %category.id,
                name = %category.name,
                projected_total = %category.projected_total,
                "Category created"
            );
            (StatusCode::CREATED, Json(category)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create category");
            map_category_error(e)
        }
    }
}

/// PUT `/categories/{category_id}` - Partially update a category.
async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<CategoryId>,
    Json(payload): Json<CategoryUpdate>,
) -> impl IntoResponse {
    let repo = CategoryRepository::new((*state.db).clone());

    // Validate the merged record, not just the patch.
    let merged = match repo.find_by_id(category_id).await {
        Ok(Some(existing)) => payload.apply_to(&existing),
        Ok(None) => return map_category_error(RepositoryError::CategoryNotFound(category_id)),
        Err(e) => {
            error!(error = %e, "Failed to find category");
            return map_category_error(e);
        }
    };
    if let Err(e) = merged.validate() {
        return error_response(&AppError::from(e));
    }

    match repo.update(category_id, payload).await {
        Ok(category) => {
            info!(category_id = %category.id, "Category updated");
            (StatusCode::OK, Json(category)).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to update category");
            map_category_error(e)
        }
    }
}

/// DELETE `/categories/{category_id}` - Delete a category, leaving its items.
async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<CategoryId>,
) -> impl IntoResponse {
    let repo = CategoryRepository::new((*state.db).clone());

    match repo.delete(category_id).await {
        Ok(()) => {
            info!(category_id = %category_id, "Category deleted");
            (StatusCode::OK, Json(json!({ "ok": true }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to delete category");
            map_category_error(e)
        }
    }
}

// ============================================================================
// Error Mapping
// ============================================================================

/// Maps category repository errors to HTTP responses.
fn map_category_error(e: RepositoryError) -> Response {
    error_response(&AppError::from(e))
}

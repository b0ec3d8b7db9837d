//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::AppState;
use salonops_shared::AppError;

pub mod categories;
pub mod cost_items;
pub mod costs;
pub mod forecast;
pub mod health;
pub mod project_summary;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(costs::routes())
        .merge(forecast::routes())
        .merge(categories::routes())
        .merge(cost_items::routes())
        .merge(project_summary::routes())
}

/// Renders an application error as `{"error": code, "message": text}`.
///
/// Server-side failures hide their detail from the client.
pub(crate) fn error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = if err.is_server_error() {
        "An error occurred".to_string()
    } else {
        err.to_string()
    };

    (
        status,
        Json(json!({
            "error": err.error_code(),
            "message": message
        })),
    )
        .into_response()
}

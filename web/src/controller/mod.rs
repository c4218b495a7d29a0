use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::response::ErrorResponse;

pub(crate) mod ask_controller;
pub(crate) mod health_check_controller;

/// Fallback for every unknown route.
pub(crate) async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not Found")))
}

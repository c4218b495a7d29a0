use axum::response::IntoResponse;
use axum::Json;

use crate::response::health::HealthResponse;

/// GET service liveness and version
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API router is up and responding to requests", body = HealthResponse),
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

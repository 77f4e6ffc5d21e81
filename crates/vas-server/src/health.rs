use axum::response::IntoResponse;
use http::StatusCode;

/// Liveness probe, always `200 ok`
pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

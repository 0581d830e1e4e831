use axum::{response::IntoResponse, Json};

use crate::pricing;

/// Handle GET /v1/catalog
pub async fn get_catalog() -> impl IntoResponse {
    Json(pricing::catalog())
}

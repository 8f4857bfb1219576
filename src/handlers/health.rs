use axum::{response::IntoResponse, Json};
use chrono::Utc;

use crate::models::response::HealthResponse;

pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        time: Utc::now(),
    })
}

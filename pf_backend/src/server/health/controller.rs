use axum::Json;
use pf_core::server::payload::health_response::HealthResponse;

use crate::error::ResultAPI;

pub async fn health_check() -> ResultAPI<HealthResponse> {
    Ok(Json(HealthResponse::ok()))
}

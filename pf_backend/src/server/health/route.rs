use std::sync::Arc;

use axum::routing::get;
use pf_core::server::routes::BackendApiHealth;

use crate::server::{app_state::AppState, health::controller::health_check};

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(BackendApiHealth::Check.path().as_str(), get(health_check))
}

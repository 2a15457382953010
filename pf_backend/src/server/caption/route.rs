use crate::server::app_state::AppState;
use crate::server::caption::controller::improve_caption_handler;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use pf_core::server::default_config::MAX_REQUEST_BODY_BYTES;
use pf_core::server::routes::BackendApiCaption;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(
            BackendApiCaption::Improve.path().as_str(),
            post(improve_caption_handler),
        )
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
}

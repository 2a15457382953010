use crate::application::caption::service::CaptionService;
use crate::clients::llm::LlmClient;
use crate::config::Settings;
use crate::error::{ErrorBackend, Result};
use crate::server::app_state::AppState;
use crate::server::{caption, health};
use axum::http::StatusCode;
use http::HeaderValue;
use pf_core::server::routes::{API_PREFIX, print_all_backend_api_paths};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, error, info, warn};

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Only the companion frontend may call the API with credentials. Any method
/// and header it asks for is allowed.
fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let allowed = HeaderValue::from_str(origin)
        .map_err(|_| ErrorBackend::InvalidCorsOrigin(origin.to_string()))?;
    Ok(CorsLayer::new()
        .allow_origin(allowed)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Builds the full router: `/health` at the root and the caption API under `/api`.
pub fn build_router(app_state: Arc<AppState>) -> Result<axum::Router> {
    let cors = cors_layer(&app_state.settings.cors_origin)?;

    let routes_api = axum::Router::new()
        .merge(caption::route::routes())
        .with_state(app_state.clone());

    let router = axum::Router::new()
        .merge(health::route::routes().with_state(app_state.clone()))
        .nest(API_PREFIX, routes_api)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .fallback(fallback);
    Ok(router)
}

/// Starts the HTTP server.
///
/// # Behavior
/// - Serves `GET /health` and `POST /api/improve_caption`.
/// - Adds CORS for the configured frontend origin and request tracing.
/// - Binds to the configured host/port and listens until the process stops.
#[tokio::main]
pub async fn http_server_backend(settings: Settings) -> Result<()> {
    if settings.llm.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set, caption requests will fail until it is provided");
    }
    let host = settings.host.clone();
    let port = settings.port.clone();
    let protocol = settings.protocol.clone();

    let service_caption = CaptionService::new(LlmClient::new(settings.llm.clone())?);
    let app_state = Arc::new(AppState::new(settings, service_caption));
    let router = build_router(app_state)?;

    print_all_backend_api_paths();

    let listener = match tokio::net::TcpListener::bind(format!("{host}:{port}")).await {
        Ok(listener) => {
            info!("Starting HTTP server on {protocol}://{host}:{port}");
            listener
        }
        Err(err) => {
            error!("Failed to bind to {host}:{port}. {}", err);
            return Err(ErrorBackend::from(err));
        }
    };
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

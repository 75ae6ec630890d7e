//! HTTP application assembly: routes plus the middleware stack.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::routes::AppState;

pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server.allowed_origins);
    let body_limit = state.config.upload.max_file_size;
    let static_dir = state.config.server.static_dir.clone();

    crate::routes::router(state)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Credentialed CORS restricted to the configured origins.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(origin = %origin, error = %err, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

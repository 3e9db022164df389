//! doctor-server library crate
//!
//! Exposes `build_app` and `config` for integration tests.
//! The actual binary entrypoint is in `main.rs`.

pub mod config;
mod error;
mod middleware;
mod routes;

use std::sync::Arc;

use axum::{Extension, Router, middleware as axum_mw, routing::get};
use doctor_core::Directory;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;

pub use middleware::request_id::REQUEST_ID_HEADER;

/// Directory shared read-only by every handler
pub type SharedDirectory = Arc<Directory>;

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port.
pub fn build_app(directory: SharedDirectory, config: &Config) -> Router {
    let rate_limiter = middleware::create_rate_limiter(config.rate_limit_rps);

    // Rate-limited search routes
    let search_routes = routes::search_routes()
        .layer(axum_mw::from_fn(middleware::rate_limit_middleware))
        .layer(Extension(rate_limiter));

    // Install Prometheus metrics recorder.
    // Repeated installs (e.g. in integration tests) are ignored; the handle
    // still renders.
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    let prometheus_handle = recorder.handle();
    let _ = metrics::set_global_recorder(recorder);

    // Operational routes (never throttled)
    let public_routes = Router::new()
        .route("/metadata", get(routes::metadata::get))
        .route("/health", get(routes::health::check))
        .route("/metrics", get(routes::metrics::get))
        .layer(Extension(prometheus_handle));

    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(public_routes)
        .merge(search_routes)
        .fallback(routes::not_found)
        .with_state(directory)
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_mw::from_fn(middleware::metrics_middleware))
}

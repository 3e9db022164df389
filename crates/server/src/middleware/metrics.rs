//! Prometheus metrics collection middleware
//!
//! Records `http_requests_total` (counter) and `http_request_duration_seconds`
//! (histogram) for every request, with method/path/status labels.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Routes reported under their own path label
const KNOWN_PATHS: [&str; 4] = ["/search/doctors", "/health", "/metadata", "/metrics"];

/// Collapse unknown paths into one label to keep cardinality bounded.
fn normalize_path(path: &str) -> &'static str {
    KNOWN_PATHS
        .iter()
        .copied()
        .find(|known| *known == path)
        .unwrap_or("other")
}

/// Middleware that records request count and duration metrics.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = normalize_path(request.uri().path());

    let start = Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();

    metrics::counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path,
        "status" => status
    )
    .increment(1);

    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path
    )
    .record(duration);

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_routes_keep_their_path() {
        assert_eq!(normalize_path("/search/doctors"), "/search/doctors");
        assert_eq!(normalize_path("/health"), "/health");
    }

    #[test]
    fn unknown_paths_share_one_label() {
        assert_eq!(normalize_path("/search/doctors/123"), "other");
        assert_eq!(normalize_path("/wp-admin"), "other");
    }
}

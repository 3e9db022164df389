pub mod health;
pub mod metadata;
pub mod metrics;
mod search;

use axum::{Router, http::Uri, routing::get};

use crate::SharedDirectory;
use crate::error::AppError;

/// Build search routes
pub fn search_routes() -> Router<SharedDirectory> {
    Router::new().route("/search/doctors", get(search::doctors))
}

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

//! Metadata endpoint handler

use axum::{Json, extract::State};
use doctor_core::ServiceDescription;

use crate::SharedDirectory;

/// GET /metadata - Describe supported languages, filters and specialties
pub async fn get(State(directory): State<SharedDirectory>) -> Json<ServiceDescription> {
    Json(ServiceDescription::new(&directory))
}

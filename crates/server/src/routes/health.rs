//! Health check endpoint

use axum::{Json, extract::State};
use serde::Serialize;

use crate::SharedDirectory;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    doctors: usize,
    specialties: usize,
}

/// GET /health - Report that the directory is loaded and how large it is
pub async fn check(State(directory): State<SharedDirectory>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        doctors: directory.doctors().len(),
        specialties: directory.mapping().specialties().len(),
    })
}

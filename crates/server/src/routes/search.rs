//! Doctor search endpoint

use axum::{
    Extension, Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use doctor_core::{SearchFilters, SearchRequest};
use serde::Deserialize;

use crate::SharedDirectory;
use crate::error::AppError;
use crate::middleware::request_id::RequestId;

/// Query parameters for doctor search
#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    pub q: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub language: Option<String>,
    pub insurance: Option<String>,
    pub lang: Option<String>,
}

impl SearchParams {
    /// Validate into a core search request. `q` must be present but may be empty.
    fn into_request(self) -> Result<SearchRequest, AppError> {
        let query = self.q.ok_or_else(|| {
            AppError::InvalidParameter("Missing required query parameter 'q'".to_string())
        })?;

        let filters = SearchFilters {
            city: self.city,
            state: self.state,
            zip: self.zip,
            language: self.language,
            insurance: self.insurance,
        };

        Ok(SearchRequest::new(&query, filters, self.lang.as_deref())?)
    }
}

/// GET /search/doctors - Resolve a disease or specialty query and list matching doctors
pub async fn doctors(
    State(directory): State<SharedDirectory>,
    Extension(RequestId(request_id)): Extension<RequestId>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let request = params.into_request()?;

    let response = directory.search(&request);
    let resolution = response.analysis.resolution.as_str();

    tracing::info!(
        request_id = %request_id,
        query = %request.query,
        lang = %request.lang,
        resolution = resolution,
        results = response.total,
        "Doctor search"
    );

    metrics::counter!("doctor_search_total", "resolution" => resolution).increment(1);
    metrics::histogram!("doctor_search_results").record(response.total as f64);

    Ok(Json(response))
}

use serde::Serialize;

use crate::directory::Directory;
use crate::lang::{Lang, LocalizedText};

pub const SERVICE_NAME: &str = "Doctor Agent PoC (EN/ZH)";

/// Query parameters accepted by `GET /search/doctors`
pub const SEARCH_FILTERS: [&str; 5] = ["city", "state", "zip", "language", "insurance"];

/// Description of what this server can search, returned by `GET /metadata`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDescription {
    pub name: String,
    pub version: String,
    pub languages: Vec<Lang>,
    pub filters: Vec<String>,
    pub specialties: Vec<SpecialtySummary>,
    pub doctor_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpecialtySummary {
    pub id: String,
    pub label: LocalizedText,
    /// Doctors listed under this specialty
    pub doctors: usize,
}

impl ServiceDescription {
    pub fn new(directory: &Directory) -> Self {
        let specialties = directory
            .mapping()
            .specialties()
            .iter()
            .map(|specialty| SpecialtySummary {
                id: specialty.id.clone(),
                label: specialty.label.clone(),
                doctors: directory
                    .doctors()
                    .iter()
                    .filter(|d| d.specialty == specialty.id)
                    .count(),
            })
            .collect();

        Self {
            name: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            languages: Lang::ALL.to_vec(),
            filters: SEARCH_FILTERS.iter().map(|f| f.to_string()).collect(),
            specialties,
            doctor_count: directory.doctors().len(),
        }
    }
}

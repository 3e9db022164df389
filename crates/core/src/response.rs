use serde::Serialize;

use crate::format::DoctorCard;
use crate::lang::Lang;
use crate::resolver::ResolutionKind;

/// A resolved specialty with its label in the requested language
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SpecialtyRef {
    pub id: String,
    pub label: String,
}

/// How the query was understood, plus the triage note
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Analysis {
    pub query: String,
    pub lang: Lang,
    pub resolution: ResolutionKind,
    pub specialties: Vec<SpecialtyRef>,
    pub triage_note: String,
}

/// Body of `GET /search/doctors`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResponse {
    pub analysis: Analysis,
    pub total: usize,
    pub doctors: Vec<DoctorCard>,
}

impl SearchResponse {
    pub fn new(analysis: Analysis, doctors: Vec<DoctorCard>) -> Self {
        Self {
            analysis,
            total: doctors.len(),
            doctors,
        }
    }

    pub fn doctor_ids(&self) -> Vec<&str> {
        self.doctors.iter().map(|d| d.doctor_id.as_str()).collect()
    }
}

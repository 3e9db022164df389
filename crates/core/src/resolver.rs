//! Free-text query to specialty resolution

use serde::{Deserialize, Serialize};

use crate::doctor::Doctor;
use crate::mapping::SpecialtyMapping;

/// Trim, lowercase and collapse whitespace runs so lookups ignore casing and spacing
pub fn normalize(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// How a query was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionKind {
    Synonym,
    Specialty,
    FreeText,
    Unconstrained,
}

impl ResolutionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResolutionKind::Synonym => "synonym",
            ResolutionKind::Specialty => "specialty",
            ResolutionKind::FreeText => "free_text",
            ResolutionKind::Unconstrained => "unconstrained",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Query matched a disease name or synonym
    Synonym { specialty: String },
    /// Query named a specialty directly
    Specialty { specialty: String },
    /// No specialty; match the normalized text against names and organizations
    FreeText { needle: String },
    /// Empty query; every doctor is a candidate
    Unconstrained,
}

impl Resolution {
    pub fn kind(&self) -> ResolutionKind {
        match self {
            Resolution::Synonym { .. } => ResolutionKind::Synonym,
            Resolution::Specialty { .. } => ResolutionKind::Specialty,
            Resolution::FreeText { .. } => ResolutionKind::FreeText,
            Resolution::Unconstrained => ResolutionKind::Unconstrained,
        }
    }

    pub fn specialty(&self) -> Option<&str> {
        match self {
            Resolution::Synonym { specialty } | Resolution::Specialty { specialty } => {
                Some(specialty)
            }
            Resolution::FreeText { .. } | Resolution::Unconstrained => None,
        }
    }

    pub fn admits(&self, doctor: &Doctor) -> bool {
        match self {
            Resolution::Synonym { specialty } | Resolution::Specialty { specialty } => {
                doctor.specialty == *specialty
            }
            Resolution::FreeText { needle } => doctor
                .searchable_text()
                .any(|text| normalize(text).contains(needle.as_str())),
            Resolution::Unconstrained => true,
        }
    }
}

/// Resolve a raw query: synonym first, then specialty name, then free text.
pub fn resolve(mapping: &SpecialtyMapping, query: &str) -> Resolution {
    let normalized = normalize(query);
    if normalized.is_empty() {
        return Resolution::Unconstrained;
    }

    if let Some(specialty) = mapping.lookup_synonym(&normalized) {
        return Resolution::Synonym {
            specialty: specialty.id.clone(),
        };
    }

    if let Some(specialty) = mapping.lookup_specialty(&normalized) {
        return Resolution::Specialty {
            specialty: specialty.id.clone(),
        };
    }

    Resolution::FreeText { needle: normalized }
}

/// Doctors admitted by a resolution, in directory order
pub fn candidates<'a>(resolution: &Resolution, doctors: &'a [Doctor]) -> Vec<&'a Doctor> {
    doctors
        .iter()
        .filter(|doctor| resolution.admits(doctor))
        .collect()
}

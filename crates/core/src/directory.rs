//! The in-memory doctor directory and the search pipeline over it

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::doctor::Doctor;
use crate::error::{DoctorError, Result};
use crate::filter::SearchFilters;
use crate::format::{DoctorCard, triage_note};
use crate::lang::Lang;
use crate::mapping::{MappingEntry, SpecialtyMapping};
use crate::resolver;
use crate::response::{Analysis, SearchResponse, SpecialtyRef};

/// A validated search request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub filters: SearchFilters,
    pub lang: Lang,
}

impl SearchRequest {
    /// Validate raw parameters. `lang` defaults to English when absent.
    pub fn new(query: &str, filters: SearchFilters, lang: Option<&str>) -> Result<Self> {
        Ok(Self {
            query: query.trim().to_string(),
            filters: filters.validated()?,
            lang: Lang::from_param(lang)?,
        })
    }
}

/// Specialty mapping and doctor records, loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct Directory {
    mapping: SpecialtyMapping,
    doctors: Vec<Doctor>,
}

impl Directory {
    /// Build a directory, validating doctor records against each other.
    ///
    /// Each doctor's specialty is rewritten to the mapping identifier it
    /// matches ignoring case and surrounding whitespace. Specialties missing
    /// from the mapping are registered so they stay resolvable by name.
    pub fn new(entries: Vec<MappingEntry>, mut doctors: Vec<Doctor>) -> Result<Self> {
        let mut mapping = SpecialtyMapping::from_entries(entries)?;
        let mut seen = HashSet::new();

        for (position, doctor) in doctors.iter().enumerate() {
            if doctor.doctor_id.trim().is_empty() {
                return Err(DoctorError::StartupData(format!(
                    "doctor #{} has an empty doctor_id",
                    position
                )));
            }
            if !seen.insert(doctor.doctor_id.as_str()) {
                return Err(DoctorError::StartupData(format!(
                    "duplicate doctor_id '{}'",
                    doctor.doctor_id
                )));
            }
            if doctor.specialty.trim().is_empty() {
                return Err(DoctorError::StartupData(format!(
                    "doctor '{}' has an empty specialty",
                    doctor.doctor_id
                )));
            }
            if doctor.name.en.trim().is_empty() {
                return Err(DoctorError::StartupData(format!(
                    "doctor '{}' has an empty English name",
                    doctor.doctor_id
                )));
            }
        }

        for doctor in &mut doctors {
            let canonical = match mapping.canonical(&doctor.specialty) {
                Some(specialty) => specialty.id.clone(),
                None => {
                    tracing::debug!(
                        doctor_id = %doctor.doctor_id,
                        specialty = %doctor.specialty,
                        "Specialty not in mapping, registering by name"
                    );
                    let index = mapping.register(&doctor.specialty, None);
                    mapping.specialties()[index].id.clone()
                }
            };
            doctor.specialty = canonical;
        }

        Ok(Self { mapping, doctors })
    }

    /// Load `mapping.json` and `doctors.json` from disk
    pub fn load(mapping_path: &Path, doctors_path: &Path) -> Result<Self> {
        let entries: Vec<MappingEntry> = read_json(mapping_path)?;
        let doctors: Vec<Doctor> = read_json(doctors_path)?;
        let directory = Self::new(entries, doctors)?;

        tracing::info!(
            mapping = %mapping_path.display(),
            doctors = %doctors_path.display(),
            specialties = directory.mapping.specialties().len(),
            synonyms = directory.mapping.synonym_count(),
            records = directory.doctors.len(),
            "Loaded doctor directory"
        );

        Ok(directory)
    }

    /// Build a directory from in-memory JSON documents
    pub fn from_json(mapping_json: &str, doctors_json: &str) -> Result<Self> {
        let entries = parse_json(Path::new("<mapping>"), mapping_json)?;
        let doctors = parse_json(Path::new("<doctors>"), doctors_json)?;
        Self::new(entries, doctors)
    }

    pub fn mapping(&self) -> &SpecialtyMapping {
        &self.mapping
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Resolve, filter and render. Never fails: no match is an empty result.
    pub fn search(&self, request: &SearchRequest) -> SearchResponse {
        let resolution = resolver::resolve(&self.mapping, &request.query);
        let candidates = resolver::candidates(&resolution, &self.doctors);
        let matched = request.filters.apply(candidates);

        let lang = request.lang;
        let specialty_label = resolution
            .specialty()
            .map(|id| self.mapping.label(id, lang));
        let specialties = resolution
            .specialty()
            .map(|id| SpecialtyRef {
                id: id.to_string(),
                label: self.mapping.label(id, lang).to_string(),
            })
            .into_iter()
            .collect();

        let analysis = Analysis {
            query: request.query.clone(),
            lang,
            resolution: resolution.kind(),
            specialties,
            triage_note: triage_note(lang, &request.query, specialty_label),
        };

        let doctors = matched
            .into_iter()
            .map(|doctor| DoctorCard::render(doctor, &self.mapping, lang))
            .collect();

        SearchResponse::new(analysis, doctors)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path).map_err(|source| DoctorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(path, &raw)
}

fn parse_json<T: DeserializeOwned>(path: &Path, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| DoctorError::Malformed {
        path: PathBuf::from(path),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::resolver::ResolutionKind;

    fn request(query: &str, filters: SearchFilters, lang: &str) -> SearchRequest {
        SearchRequest::new(query, filters, Some(lang)).unwrap()
    }

    #[test]
    fn arrhythmia_returns_cardiologists_only() {
        let directory = fixtures::directory();
        let response = directory.search(&request("arrhythmia", SearchFilters::default(), "en"));

        assert_eq!(response.analysis.resolution, ResolutionKind::Synonym);
        assert_eq!(response.analysis.specialties[0].id, "Cardiology");
        assert_eq!(response.doctor_ids(), vec!["d001", "d002"]);
        assert!(response.doctors.iter().all(|d| d.specialty == "Cardiology"));
        assert_eq!(response.total, 2);
    }

    #[test]
    fn specialty_with_insurance_in_chinese() {
        let directory = fixtures::directory();
        let filters = SearchFilters {
            insurance: Some("BCBS".into()),
            ..Default::default()
        };
        let response = directory.search(&request("cardiology", filters, "zh"));

        assert_eq!(response.analysis.resolution, ResolutionKind::Specialty);
        assert_eq!(response.doctor_ids(), vec!["d001"]);
        assert_eq!(response.doctors[0].name, "陈伟 医生");
        assert_eq!(response.analysis.specialties[0].label, "心脏内科");
        assert!(response.analysis.triage_note.contains("心脏内科"));
    }

    #[test]
    fn name_query_uses_free_text() {
        let directory = fixtures::directory();
        let response = directory.search(&request("Wei Chen", SearchFilters::default(), "en"));

        assert_eq!(response.analysis.resolution, ResolutionKind::FreeText);
        assert!(response.analysis.specialties.is_empty());
        assert_eq!(response.doctor_ids(), vec!["d001"]);
    }

    #[test]
    fn unknown_query_is_an_empty_result() {
        let directory = fixtures::directory();
        let response =
            directory.search(&request("unknown-disease-xyz", SearchFilters::default(), "en"));

        assert!(response.doctors.is_empty());
        assert_eq!(response.total, 0);
        assert!(response.analysis.triage_note.starts_with("Could not map"));
    }

    #[test]
    fn mapped_specialty_without_doctors_is_empty() {
        let directory = fixtures::directory();
        let response = directory.search(&request("migraine", SearchFilters::default(), "en"));

        assert_eq!(response.analysis.specialties[0].id, "Neurology");
        assert!(response.doctors.is_empty());
    }

    #[test]
    fn languages_return_the_same_doctors() {
        let directory = fixtures::directory();
        let filters = SearchFilters {
            state: Some("NY".into()),
            ..Default::default()
        };
        let en = directory.search(&request("", filters.clone(), "en"));
        let zh = directory.search(&request("", filters, "zh"));

        assert_eq!(en.doctor_ids(), zh.doctor_ids());
        assert_ne!(en.doctors[0].name, zh.doctors[0].name);
        assert_eq!(en.analysis.resolution, ResolutionKind::Unconstrained);
    }

    #[test]
    fn repeated_searches_are_identical() {
        let directory = fixtures::directory();
        let req = request("diabetes", SearchFilters::default(), "zh");
        assert_eq!(directory.search(&req), directory.search(&req));
    }

    #[test]
    fn invalid_lang_is_rejected() {
        let err = SearchRequest::new("arrhythmia", SearchFilters::default(), Some("fr"))
            .unwrap_err();
        assert!(matches!(err, DoctorError::InvalidParameter(msg) if msg.contains("fr")));
    }

    #[test]
    fn duplicate_doctor_ids_fail_to_load() {
        let doctors = r#"[
            {"doctor_id": "d1", "name": {"en": "A"}, "specialty": "Cardiology"},
            {"doctor_id": "d1", "name": {"en": "B"}, "specialty": "Cardiology"}
        ]"#;
        let err = Directory::from_json("[]", doctors).unwrap_err();
        assert!(matches!(err, DoctorError::StartupData(msg) if msg.contains("d1")));
    }

    #[test]
    fn malformed_json_fails_to_load() {
        let err = Directory::from_json("{not json", "[]").unwrap_err();
        assert!(matches!(err, DoctorError::Malformed { .. }));
    }

    #[test]
    fn missing_file_fails_to_load() {
        let err = Directory::load(
            Path::new("/nonexistent/mapping.json"),
            Path::new("/nonexistent/doctors.json"),
        )
        .unwrap_err();
        assert!(matches!(err, DoctorError::Io { .. }));
    }

    #[test]
    fn unmapped_specialty_is_resolvable_by_name() {
        let doctors = r#"[{"doctor_id": "d1", "name": {"en": "A"}, "specialty": "Oncology"}]"#;
        let directory = Directory::from_json("[]", doctors).unwrap();
        let response = directory.search(&request("oncology", SearchFilters::default(), "en"));
        assert_eq!(response.doctor_ids(), vec!["d1"]);
    }

    #[test]
    fn doctor_specialty_matches_mapping_ignoring_case_and_padding() {
        let mapping = r#"[{"specialty": "Cardiology", "synonyms": ["arrhythmia"]}]"#;
        let doctors = r#"[
            {"doctor_id": "a", "name": {"en": "A"}, "specialty": "cardiology"},
            {"doctor_id": "b", "name": {"en": "B"}, "specialty": "Cardiology "},
            {"doctor_id": "c", "name": {"en": "C"}, "specialty": "Cardiology"}
        ]"#;
        let directory = Directory::from_json(mapping, doctors).unwrap();

        assert_eq!(directory.mapping().specialties().len(), 1);
        assert!(directory.doctors().iter().all(|d| d.specialty == "Cardiology"));

        let by_synonym = directory.search(&request("arrhythmia", SearchFilters::default(), "en"));
        assert_eq!(by_synonym.doctor_ids(), vec!["a", "b", "c"]);

        let by_name = directory.search(&request("cardiology", SearchFilters::default(), "en"));
        assert_eq!(by_name.analysis.resolution, ResolutionKind::Specialty);
        assert_eq!(by_name.doctor_ids(), vec!["a", "b", "c"]);
    }

    #[test]
    fn unmapped_specialty_is_registered_once_trimmed() {
        let doctors = r#"[
            {"doctor_id": "d1", "name": {"en": "A"}, "specialty": " Oncology"},
            {"doctor_id": "d2", "name": {"en": "B"}, "specialty": "oncology"}
        ]"#;
        let directory = Directory::from_json("[]", doctors).unwrap();

        assert_eq!(directory.mapping().specialties().len(), 1);
        assert_eq!(directory.doctors()[1].specialty, "Oncology");
        let response = directory.search(&request("ONCOLOGY", SearchFilters::default(), "en"));
        assert_eq!(response.doctor_ids(), vec!["d1", "d2"]);
    }
}

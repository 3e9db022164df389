//! Conjunctive location, language and insurance filters

use crate::doctor::{Doctor, Location};
use crate::error::DoctorError;

/// Longest accepted filter value, in characters
pub const MAX_FILTER_LEN: usize = 100;

/// Optional filters; only the supplied ones are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub language: Option<String>,
    pub insurance: Option<String>,
}

impl SearchFilters {
    /// Trim every value, drop blank ones and reject values of the wrong shape
    pub fn validated(self) -> Result<Self, DoctorError> {
        Ok(Self {
            city: clean("city", self.city)?,
            state: clean("state", self.state)?,
            zip: clean("zip", self.zip)?,
            language: clean("language", self.language)?,
            insurance: clean("insurance", self.insurance)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.state.is_none()
            && self.zip.is_none()
            && self.language.is_none()
            && self.insurance.is_none()
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        if let Some(city) = &self.city {
            if !any_location(doctor, city, |loc| loc.city.as_deref()) {
                return false;
            }
        }
        if let Some(state) = &self.state {
            if !any_location(doctor, state, |loc| loc.state.as_deref()) {
                return false;
            }
        }
        if let Some(zip) = &self.zip {
            if !any_location(doctor, zip, |loc| loc.zip.as_deref()) {
                return false;
            }
        }
        if let Some(language) = &self.language {
            if !doctor.languages.iter().any(|l| eq_ignore_case(l, language)) {
                return false;
            }
        }
        if let Some(insurance) = &self.insurance {
            let accepted = doctor
                .insurances
                .iter()
                .flat_map(|ins| ins.names())
                .any(|name| eq_ignore_case(name, insurance));
            if !accepted {
                return false;
            }
        }
        true
    }

    /// Keep the doctors that satisfy every supplied filter, preserving order
    pub fn apply<'a>(&self, candidates: Vec<&'a Doctor>) -> Vec<&'a Doctor> {
        if self.is_empty() {
            return candidates;
        }
        candidates
            .into_iter()
            .filter(|doctor| self.matches(doctor))
            .collect()
    }
}

fn clean(name: &str, value: Option<String>) -> Result<Option<String>, DoctorError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > MAX_FILTER_LEN {
        return Err(DoctorError::InvalidParameter(format!(
            "'{}' must be at most {} characters",
            name, MAX_FILTER_LEN
        )));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(DoctorError::InvalidParameter(format!(
            "'{}' must not contain control characters",
            name
        )));
    }
    Ok(Some(trimmed.to_string()))
}

fn any_location<F>(doctor: &Doctor, wanted: &str, field: F) -> bool
where
    F: Fn(&Location) -> Option<&str>,
{
    doctor
        .locations
        .iter()
        .filter_map(field)
        .any(|value| eq_ignore_case(value, wanted))
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn ids(doctors: &[&Doctor]) -> Vec<String> {
        doctors.iter().map(|d| d.doctor_id.clone()).collect()
    }

    fn run(filters: SearchFilters) -> Vec<String> {
        let directory = fixtures::directory();
        let all: Vec<&Doctor> = directory.doctors().iter().collect();
        ids(&filters.validated().unwrap().apply(all))
    }

    #[test]
    fn no_filters_returns_candidates_unchanged() {
        let directory = fixtures::directory();
        let all: Vec<&Doctor> = directory.doctors().iter().rev().collect();
        let expected = ids(&all);
        assert_eq!(ids(&SearchFilters::default().apply(all)), expected);
    }

    #[test]
    fn city_and_state_use_case_insensitive_equality() {
        let boston = run(SearchFilters {
            city: Some("BOSTON".into()),
            ..Default::default()
        });
        assert_eq!(boston, vec!["d001", "d003"]);

        // equality, not substring
        let partial = run(SearchFilters {
            city: Some("Bos".into()),
            ..Default::default()
        });
        assert!(partial.is_empty());

        let ny = run(SearchFilters {
            state: Some("ny".into()),
            ..Default::default()
        });
        assert_eq!(ny, vec!["d002", "d005"]);
    }

    #[test]
    fn any_location_can_satisfy_a_filter() {
        let jersey = run(SearchFilters {
            city: Some("Jersey City".into()),
            ..Default::default()
        });
        assert_eq!(jersey, vec!["d005"]);

        let zip = run(SearchFilters {
            zip: Some("07302".into()),
            ..Default::default()
        });
        assert_eq!(zip, vec!["d005"]);
    }

    #[test]
    fn language_is_a_membership_test() {
        let cantonese = run(SearchFilters {
            language: Some("cantonese".into()),
            ..Default::default()
        });
        assert_eq!(cantonese, vec!["d003", "d004"]);
    }

    #[test]
    fn insurance_matches_code_name_or_plan_without_aliases() {
        let by_code = run(SearchFilters {
            insurance: Some("bcbs".into()),
            ..Default::default()
        });
        assert_eq!(by_code, vec!["d001", "d003", "d005"]);

        let by_name = run(SearchFilters {
            insurance: Some("Blue Cross Blue Shield".into()),
            ..Default::default()
        });
        assert_eq!(by_name, by_code);

        let alias = run(SearchFilters {
            insurance: Some("Blue Cross".into()),
            ..Default::default()
        });
        assert!(alias.is_empty());
    }

    #[test]
    fn filters_are_conjunctive() {
        let result = run(SearchFilters {
            city: Some("Boston".into()),
            language: Some("Cantonese".into()),
            insurance: Some("BCBS".into()),
            ..Default::default()
        });
        assert_eq!(result, vec!["d003"]);
    }

    #[test]
    fn every_result_satisfies_every_filter() {
        let directory = fixtures::directory();
        let filters = SearchFilters {
            state: Some("MA".into()),
            language: Some("Mandarin".into()),
            ..Default::default()
        };
        let all: Vec<&Doctor> = directory.doctors().iter().collect();
        let result = filters.apply(all);
        assert!(!result.is_empty());
        for doctor in result {
            assert!(doctor.locations.iter().any(|l| l.state.as_deref() == Some("MA")));
            assert!(doctor.languages.iter().any(|l| l == "Mandarin"));
        }
    }

    #[test]
    fn blank_values_are_ignored() {
        let filters = SearchFilters {
            city: Some("   ".into()),
            insurance: Some(" Aetna ".into()),
            ..Default::default()
        }
        .validated()
        .unwrap();
        assert_eq!(filters.city, None);
        assert_eq!(filters.insurance.as_deref(), Some("Aetna"));
    }

    #[test]
    fn malformed_values_are_rejected() {
        let too_long = SearchFilters {
            city: Some("x".repeat(MAX_FILTER_LEN + 1)),
            ..Default::default()
        };
        assert!(matches!(
            too_long.validated().unwrap_err(),
            DoctorError::InvalidParameter(_)
        ));

        let control = SearchFilters {
            language: Some("Eng\u{0}lish".into()),
            ..Default::default()
        };
        assert!(matches!(
            control.validated(),
            Err(DoctorError::InvalidParameter(_))
        ));
    }
}

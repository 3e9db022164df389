//! Doctor directory records as stored in `doctors.json`

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::lang::{Lang, LocalizedText};

/// An accepted insurance plan. Names are free text; no alias resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insurance {
    #[serde(default)]
    pub payer_code: Option<String>,
    #[serde(default)]
    pub payer_name: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub verified_at: Option<NaiveDate>,
}

impl Insurance {
    /// Every name this plan can be requested by
    pub fn names(&self) -> impl Iterator<Item = &str> {
        [&self.payer_code, &self.payer_name, &self.plan]
            .into_iter()
            .filter_map(|name| name.as_deref())
    }

    /// "Payer Name (Plan)", falling back to the payer code
    pub fn display(&self) -> String {
        match (&self.payer_name, &self.plan) {
            (Some(name), Some(plan)) => format!("{} ({})", name, plan),
            (Some(name), None) => name.clone(),
            (None, Some(plan)) => match &self.payer_code {
                Some(code) => format!("{} ({})", code, plan),
                None => plan.clone(),
            },
            (None, None) => self.payer_code.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentMode {
    InPerson,
    Telehealth,
    Phone,
}

impl AppointmentMode {
    pub fn label(self, lang: Lang) -> &'static str {
        match (self, lang) {
            (AppointmentMode::InPerson, Lang::En) => "In person",
            (AppointmentMode::InPerson, Lang::Zh) => "线下就诊",
            (AppointmentMode::Telehealth, Lang::En) => "Telehealth",
            (AppointmentMode::Telehealth, Lang::Zh) => "远程医疗",
            (AppointmentMode::Phone, Lang::En) => "Phone",
            (AppointmentMode::Phone, Lang::Zh) => "电话预约",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portal {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default)]
    pub modes: Vec<AppointmentMode>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub online_portals: Vec<Portal>,
    #[serde(default)]
    pub walk_in: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub clinic_name: Option<LocalizedText>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

/// Provenance citation for a record. Not verified or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawled_at: Option<DateTime<Utc>>,
}

/// One practitioner or practice entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub doctor_id: String,
    pub name: LocalizedText,
    #[serde(default)]
    pub name_variants: Vec<String>,
    #[serde(default)]
    pub organization: Option<LocalizedText>,
    #[serde(default)]
    pub description: Option<LocalizedText>,
    pub specialty: String,
    #[serde(default)]
    pub npi: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub insurances: Vec<Insurance>,
    #[serde(default)]
    pub appointment: Appointment,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub last_updated: Option<NaiveDate>,
}

impl Doctor {
    pub fn primary_location(&self) -> Option<&Location> {
        self.locations.first()
    }

    /// Text fields searched by a free-text query, in both languages
    pub fn searchable_text(&self) -> impl Iterator<Item = &str> {
        let clinics = self
            .locations
            .iter()
            .filter_map(|loc| loc.clinic_name.as_ref())
            .flat_map(|text| text.variants());

        self.name
            .variants()
            .chain(self.name_variants.iter().map(String::as_str))
            .chain(self.organization.iter().flat_map(|text| text.variants()))
            .chain(clinics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insurance_display_prefers_payer_name_and_plan() {
        let full = Insurance {
            payer_code: Some("BCBS".into()),
            payer_name: Some("Blue Cross Blue Shield".into()),
            plan: Some("PPO".into()),
            verified_at: None,
        };
        assert_eq!(full.display(), "Blue Cross Blue Shield (PPO)");

        let code_only = Insurance {
            payer_code: Some("KP".into()),
            ..Default::default()
        };
        assert_eq!(code_only.display(), "KP");
        assert_eq!(code_only.names().collect::<Vec<_>>(), vec!["KP"]);
    }

    #[test]
    fn deserializes_minimal_record() {
        let doctor: Doctor = serde_json::from_str(
            r#"{"doctor_id": "d1", "name": {"en": "Ada Lee"}, "specialty": "Neurology"}"#,
        )
        .unwrap();

        assert!(doctor.locations.is_empty());
        assert!(doctor.appointment.modes.is_empty());
        assert_eq!(doctor.name.get(Lang::Zh), "Ada Lee");
    }

    #[test]
    fn rejects_unknown_appointment_mode() {
        let result = serde_json::from_str::<Doctor>(
            r#"{"doctor_id": "d1", "name": {"en": "Ada Lee"}, "specialty": "Neurology",
                "appointment": {"modes": ["carrier_pigeon"]}}"#,
        );
        assert!(result.is_err());
    }
}

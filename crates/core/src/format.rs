//! Bilingual rendering of search results

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::doctor::{AppointmentMode, Doctor, Location, Source};
use crate::lang::Lang;
use crate::mapping::SpecialtyMapping;

/// Fixed, non-diagnostic advisory shown alongside results.
///
/// `specialty_label` is the localized label of the resolved specialty, if any.
pub fn triage_note(lang: Lang, query: &str, specialty_label: Option<&str>) -> String {
    let query = query.trim();
    match (lang, specialty_label) {
        (Lang::En, Some(label)) => format!(
            "For your query '{query}', consider seeing a {label} specialist. \
             If you have red-flag symptoms (e.g., chest pain, shortness of breath, fainting), \
             call 911 or go to the nearest emergency room. \
             This is not a diagnosis or medical advice."
        ),
        (Lang::Zh, Some(label)) => format!(
            "根据您的查询“{query}”，建议考虑就诊{label}。\
             如出现胸痛、呼吸困难、晕厥等急症，请立即拨打 911 或前往最近的急诊室。\
             此信息仅供参考，不构成诊断或医疗建议。"
        ),
        (Lang::En, None) => format!(
            "Could not map '{query}' to a specialty. \
             Please describe your symptoms or a known diagnosis in more detail. \
             For emergencies, call 911. This is not a diagnosis or medical advice."
        ),
        (Lang::Zh, None) => format!(
            "未能从“{query}”识别出对应科室。请提供更具体的症状或已知诊断。\
             如遇紧急情况，请拨打 911。此信息仅供参考，不构成诊断或医疗建议。"
        ),
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModeCard {
    pub mode: AppointmentMode,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PortalCard {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AppointmentCard {
    pub modes: Vec<ModeCard>,
    pub phone: Option<String>,
    pub online_portals: Vec<PortalCard>,
    pub walk_in: Option<bool>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocationCard {
    pub clinic_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl LocationCard {
    fn render(location: &Location, lang: Lang) -> Self {
        Self {
            clinic_name: location
                .clinic_name
                .as_ref()
                .map(|name| name.get(lang).to_string()),
            address: location.address.clone(),
            city: location.city.clone(),
            state: location.state.clone(),
            zip: location.zip.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SourceCard {
    pub source: Option<String>,
    pub url: Option<String>,
    pub crawled_at: Option<DateTime<Utc>>,
}

impl From<&Source> for SourceCard {
    fn from(source: &Source) -> Self {
        Self {
            source: source.source.clone(),
            url: source.url.clone(),
            crawled_at: source.crawled_at,
        }
    }
}

/// A doctor record with every bilingual field resolved to one language
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DoctorCard {
    pub doctor_id: String,
    pub name: String,
    pub organization: Option<String>,
    pub description: Option<String>,
    pub specialty: String,
    pub specialty_label: String,
    pub npi: Option<String>,
    pub languages: Vec<String>,
    pub insurances: Vec<String>,
    pub appointment: AppointmentCard,
    /// Primary (first) location
    pub location: Option<LocationCard>,
    pub sources: Vec<SourceCard>,
    pub last_updated: Option<NaiveDate>,
}

impl DoctorCard {
    pub fn render(doctor: &Doctor, mapping: &SpecialtyMapping, lang: Lang) -> Self {
        let appointment = &doctor.appointment;

        Self {
            doctor_id: doctor.doctor_id.clone(),
            name: doctor.name.get(lang).to_string(),
            organization: doctor
                .organization
                .as_ref()
                .map(|org| org.get(lang).to_string()),
            description: doctor
                .description
                .as_ref()
                .map(|desc| desc.get(lang).to_string()),
            specialty: doctor.specialty.clone(),
            specialty_label: mapping.label(&doctor.specialty, lang).to_string(),
            npi: doctor.npi.clone(),
            languages: doctor.languages.clone(),
            insurances: doctor
                .insurances
                .iter()
                .map(|ins| ins.display())
                .filter(|s| !s.is_empty())
                .collect(),
            appointment: AppointmentCard {
                modes: appointment
                    .modes
                    .iter()
                    .map(|&mode| ModeCard {
                        mode,
                        label: mode.label(lang),
                    })
                    .collect(),
                phone: appointment.phone.clone(),
                online_portals: appointment
                    .online_portals
                    .iter()
                    .map(|p| PortalCard {
                        kind: p.kind.clone(),
                        url: p.url.clone(),
                    })
                    .collect(),
                walk_in: appointment.walk_in,
            },
            location: doctor
                .primary_location()
                .map(|loc| LocationCard::render(loc, lang)),
            sources: doctor.sources.iter().map(SourceCard::from).collect(),
            last_updated: doctor.last_updated,
        }
    }
}

//! Display language selection and bilingual text

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DoctorError;

/// Output language for display fields and the triage note
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Zh];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }

    /// Parse an optional `lang` parameter, defaulting to English when absent or blank
    pub fn from_param(value: Option<&str>) -> Result<Self, DoctorError> {
        match value.map(str::trim) {
            None | Some("") => Ok(Lang::default()),
            Some(raw) => raw.parse(),
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = DoctorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "zh" => Ok(Lang::Zh),
            _ => Err(DoctorError::InvalidParameter(format!(
                "Unsupported lang '{}': expected 'en' or 'zh'",
                s.trim()
            ))),
        }
    }
}

/// A display string with English and (optionally) Chinese values.
///
/// The Chinese value falls back to English when it is missing or blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zh: Option<String>,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: Some(zh.into()),
        }
    }

    /// Same text in both languages
    pub fn same(text: impl Into<String>) -> Self {
        Self {
            en: text.into(),
            zh: None,
        }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Zh => self
                .zh
                .as_deref()
                .filter(|zh| !zh.trim().is_empty())
                .unwrap_or(&self.en),
        }
    }

    /// Both language values, skipping a missing Chinese one
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.en.as_str()).chain(self.zh.as_deref())
    }
}

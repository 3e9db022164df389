//! Disease/synonym to specialty lookup table

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DoctorError;
use crate::lang::{Lang, LocalizedText};
use crate::resolver::normalize;

/// One entry of `mapping.json`: a specialty and the terms that map to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingEntry {
    pub specialty: String,
    #[serde(default)]
    pub label: Option<LocalizedText>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// A canonical specialty with its bilingual display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specialty {
    pub id: String,
    pub label: LocalizedText,
}

/// Read-only synonym and specialty-name index, built once at startup.
///
/// Keys are normalized with [`normalize`]. When the same synonym is listed
/// under two specialties the first one in file order wins.
#[derive(Debug, Clone, Default)]
pub struct SpecialtyMapping {
    specialties: Vec<Specialty>,
    by_id: HashMap<String, usize>,
    by_key: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    synonyms: HashMap<String, usize>,
}

impl SpecialtyMapping {
    pub fn from_entries(entries: Vec<MappingEntry>) -> Result<Self, DoctorError> {
        let mut mapping = Self::default();

        for (position, entry) in entries.into_iter().enumerate() {
            let id = entry.specialty.trim();
            if id.is_empty() {
                return Err(DoctorError::StartupData(format!(
                    "mapping entry #{} has an empty specialty",
                    position
                )));
            }

            let index = mapping.register(id, entry.label);

            for synonym in &entry.synonyms {
                let key = normalize(synonym);
                if key.is_empty() {
                    continue;
                }
                if let Some(&existing) = mapping.synonyms.get(&key) {
                    if existing != index {
                        tracing::warn!(
                            synonym = %synonym,
                            kept = %mapping.specialties[existing].id,
                            ignored = %id,
                            "Synonym maps to more than one specialty, keeping the first"
                        );
                    }
                    continue;
                }
                mapping.synonyms.insert(key, index);
            }
        }

        Ok(mapping)
    }

    /// Add a specialty (or fill in a missing label), returning its index
    pub fn register(&mut self, id: &str, label: Option<LocalizedText>) -> usize {
        let id = id.trim();
        let index = match self.by_id.get(id) {
            Some(&index) => {
                if let Some(label) = label {
                    if self.specialties[index].label == LocalizedText::same(id) {
                        self.specialties[index].label = label;
                    }
                }
                index
            }
            None => {
                let index = self.specialties.len();
                self.specialties.push(Specialty {
                    id: id.to_string(),
                    label: label.unwrap_or_else(|| LocalizedText::same(id)),
                });
                self.by_id.insert(id.to_string(), index);
                self.by_key.entry(normalize(id)).or_insert(index);
                index
            }
        };

        let names: Vec<String> = std::iter::once(id)
            .chain(self.specialties[index].label.variants())
            .map(normalize)
            .filter(|name| !name.is_empty())
            .collect();
        for name in names {
            self.by_name.entry(name).or_insert(index);
        }

        index
    }

    /// Exact (normalized) synonym lookup
    pub fn lookup_synonym(&self, normalized: &str) -> Option<&Specialty> {
        self.synonyms
            .get(normalized)
            .map(|&index| &self.specialties[index])
    }

    /// Exact (normalized) lookup by specialty identifier or label
    pub fn lookup_specialty(&self, normalized: &str) -> Option<&Specialty> {
        self.by_name
            .get(normalized)
            .map(|&index| &self.specialties[index])
    }

    pub fn get(&self, id: &str) -> Option<&Specialty> {
        self.by_id.get(id).map(|&index| &self.specialties[index])
    }

    /// Specialty whose identifier equals `id` ignoring case and surrounding whitespace
    pub fn canonical(&self, id: &str) -> Option<&Specialty> {
        self.by_key
            .get(&normalize(id))
            .map(|&index| &self.specialties[index])
    }

    /// Localized label of a specialty, or the identifier itself if unknown
    pub fn label<'a>(&'a self, id: &'a str, lang: Lang) -> &'a str {
        self.get(id).map(|s| s.label.get(lang)).unwrap_or(id)
    }

    pub fn specialties(&self) -> &[Specialty] {
        &self.specialties
    }

    pub fn synonym_count(&self) -> usize {
        self.synonyms.len()
    }
}

//! doctor-core: doctor directory lookup with bilingual (EN/ZH) output
//!
//! This crate holds the static specialty mapping and doctor records,
//! resolves free-text queries to specialties, applies filters and renders
//! results in English or Chinese. It performs no I/O after loading.

pub mod capability;
pub mod directory;
pub mod doctor;
pub mod error;
pub mod filter;
pub mod format;
pub mod lang;
pub mod mapping;
pub mod outcome;
pub mod resolver;
pub mod response;

#[cfg(test)]
mod fixtures;

pub use capability::ServiceDescription;
pub use directory::{Directory, SearchRequest};
pub use doctor::{Appointment, AppointmentMode, Doctor, Insurance, Location, Portal, Source};
pub use error::DoctorError;
pub use filter::SearchFilters;
pub use format::{DoctorCard, triage_note};
pub use lang::{Lang, LocalizedText};
pub use mapping::{MappingEntry, Specialty, SpecialtyMapping};
pub use outcome::{ErrorOutcome, IssueKind};
pub use resolver::{Resolution, ResolutionKind};
pub use response::{Analysis, SearchResponse, SpecialtyRef};

//! Shared test directory

use crate::directory::Directory;

pub const MAPPING_JSON: &str = include_str!("../testdata/mapping.json");
pub const DOCTORS_JSON: &str = include_str!("../testdata/doctors.json");

pub fn directory() -> Directory {
    Directory::from_json(MAPPING_JSON, DOCTORS_JSON).expect("fixture directory must load")
}

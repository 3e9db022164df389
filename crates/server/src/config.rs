//! Server configuration

use std::path::PathBuf;

const DEFAULT_RATE_LIMIT_RPS: u32 = 100;

/// Server configuration loaded from environment variables
pub struct Config {
    pub bind_address: String,
    pub mapping_file: PathBuf,
    pub doctors_file: PathBuf,
    pub cors_origins: Vec<String>,
    pub rate_limit_rps: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let data_dir = PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "data".into()));

        Self {
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            mapping_file: std::env::var("MAPPING_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("mapping.json")),
            doctors_file: std::env::var("DOCTORS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("doctors.json")),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
            ),
            rate_limit_rps: parse_rps(std::env::var("RATE_LIMIT_RPS").ok().as_deref()),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

fn parse_rps(raw: Option<&str>) -> u32 {
    match raw.and_then(|v| v.trim().parse::<u32>().ok()) {
        Some(0) => 1,
        Some(rps) => rps,
        None => DEFAULT_RATE_LIMIT_RPS,
    }
}

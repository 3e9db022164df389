use std::path::PathBuf;

use thiserror::Error;

/// Doctor directory error types
#[derive(Debug, Error)]
pub enum DoctorError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid startup data: {0}")]
    StartupData(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, DoctorError>;

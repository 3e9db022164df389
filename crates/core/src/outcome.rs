use serde::{Deserialize, Serialize};

/// Kind of error reported to a client
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    InvalidParameter,
    NotFound,
    Throttled,
    Internal,
}

/// Structured error body returned by every failing request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorOutcome {
    pub error: IssueKind,
    pub message: String,
}

impl ErrorOutcome {
    pub fn new(error: IssueKind, message: &str) -> Self {
        Self {
            error,
            message: message.to_string(),
        }
    }

    pub fn invalid(message: &str) -> Self {
        Self::new(IssueKind::InvalidParameter, message)
    }

    pub fn not_found(message: &str) -> Self {
        Self::new(IssueKind::NotFound, message)
    }

    pub fn throttled(message: &str) -> Self {
        Self::new(IssueKind::Throttled, message)
    }

    pub fn internal(message: &str) -> Self {
        Self::new(IssueKind::Internal, message)
    }
}

use crate::primitive::{Value, Variant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("no specimen named `{name}` is registered")]
    NotFound { name: String },
    #[error("specimen `{name}` registered twice")]
    DuplicateSpecimen { name: String },
    #[error("{specimen} [{case}] {variant} variant returned {actual}, expected {expected}")]
    Mismatch {
        specimen: String,
        case: String,
        variant: Variant,
        expected: Value,
        actual: Value,
    },
    #[error("invalid test input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("json failure: {0}")]
    Json(#[from] serde_json::Error),
}

impl HarnessError {
    /// Process exit code used by the binaries.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Mismatch { .. } => 1,
            Self::NotFound { .. } | Self::Config(_) => 2,
            Self::DuplicateSpecimen { .. } | Self::InvalidInput(_) => 3,
            Self::Io(_) | Self::Json(_) => 4,
        }
    }
}

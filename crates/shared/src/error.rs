use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse failure class used to pick user-facing wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Transport,
    NotFound,
    Validation,
    Internal,
}

/// Raised when a members payload cannot be used at all.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed members payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("members payload must be a JSON array, found {found}")]
    NotAnArray { found: &'static str },
}

impl PayloadError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::Validation
    }
}

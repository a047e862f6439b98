use reqwest::StatusCode;
use shared::error::{ErrorCode, PayloadError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to reach members endpoint {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("members endpoint {url} returned {status}")]
    Status { url: String, status: StatusCode },
    #[error("failed to read members response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

impl LoadError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Transport { .. } | Self::Body(_) => ErrorCode::Transport,
            Self::Status { status, .. } if *status == StatusCode::NOT_FOUND => ErrorCode::NotFound,
            Self::Status { status, .. } if status.is_server_error() => ErrorCode::Transport,
            Self::Status { .. } => ErrorCode::Internal,
            Self::Payload(err) => err.code(),
        }
    }
}

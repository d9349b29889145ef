use thiserror::Error;
use wellpath_core::error::CoreError;
use wellpath_core::remote::RemoteError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<ApiError> for RemoteError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport { message, .. } => RemoteError::Transport(message),
            ApiError::Status { status, .. } => RemoteError::Status(status),
            ApiError::Decode { message, .. } => RemoteError::Decode(message),
            ApiError::Rejected(reason) => RemoteError::Rejected(reason),
            other => RemoteError::Transport(other.to_string()),
        }
    }
}

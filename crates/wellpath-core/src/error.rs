use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown assessment kind: {0}")]
    UnknownKind(String),

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("invalid identity: {0:?}")]
    InvalidIdentity(String),

    #[error("invalid referral form: {0}")]
    InvalidReferral(String),
}

use thiserror::Error;
use wellpath_core::remote::RemoteError;

/// Why a gate landed in its `Error` state. Every variant is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateFailure {
    #[error("no signed-in user")]
    IdentityUnresolved,

    #[error("status lookup failed: {0}")]
    Lookup(#[from] RemoteError),

    #[error("unrecognized completion status {0:?}")]
    UnrecognizedStatus(String),
}

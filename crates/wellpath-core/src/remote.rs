//! Shared shape of calls made through collaborator traits.
//!
//! The gate and the chat poller never see HTTP types. Whatever backs a
//! collaborator reports failures as a [`RemoteError`].

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The request never produced a response (DNS, connect, reset).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-success HTTP status.
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// The body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The body decoded but its `status` field did not report success.
    #[error("request rejected: {0}")]
    Rejected(String),
}

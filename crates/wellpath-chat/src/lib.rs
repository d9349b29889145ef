//! wellpath-chat
//!
//! Referral conversations: who a message goes to, and a cancellable
//! background poller that keeps a screen's message list fresh.

pub mod error;
pub mod poller;
pub mod recipient;
pub mod source;

pub use error::ChatError;
pub use poller::{DEFAULT_POLL_INTERVAL, PollHandle, spawn_poller};
pub use recipient::{compose, recipient_for, send};
pub use source::{MessageSink, MessageSource};

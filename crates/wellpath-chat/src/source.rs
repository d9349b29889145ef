use std::sync::Arc;

use wellpath_core::models::chat::{ChatMessage, OutgoingMessage};
use wellpath_core::models::submission::SubmissionAck;
use wellpath_core::remote::{BoxFuture, RemoteError};

/// Read side of a referral conversation.
pub trait MessageSource: Send + Sync {
    /// Every message on the referral, oldest first.
    fn fetch_messages(&self, referral_id: u64)
    -> BoxFuture<'_, Result<Vec<ChatMessage>, RemoteError>>;
}

/// Write side of a referral conversation.
pub trait MessageSink: Send + Sync {
    fn send_message<'a>(
        &'a self,
        message: &'a OutgoingMessage,
    ) -> BoxFuture<'a, Result<SubmissionAck, RemoteError>>;
}

impl<T: MessageSource + ?Sized> MessageSource for Arc<T> {
    fn fetch_messages(
        &self,
        referral_id: u64,
    ) -> BoxFuture<'_, Result<Vec<ChatMessage>, RemoteError>> {
        (**self).fetch_messages(referral_id)
    }
}

impl<T: MessageSink + ?Sized> MessageSink for Arc<T> {
    fn send_message<'a>(
        &'a self,
        message: &'a OutgoingMessage,
    ) -> BoxFuture<'a, Result<SubmissionAck, RemoteError>> {
        (**self).send_message(message)
    }
}

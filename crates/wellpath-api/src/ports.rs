use wellpath_chat::{MessageSink, MessageSource};
use wellpath_core::models::chat::{ChatMessage, OutgoingMessage};
use wellpath_core::models::identity::Identity;
use wellpath_core::models::kind::AssessmentKind;
use wellpath_core::models::submission::{Submission, SubmissionAck};
use wellpath_core::remote::{BoxFuture, RemoteError};
use wellpath_gate::ports::AssessmentApi;

use crate::client::ApiClient;

impl AssessmentApi for ApiClient {
    fn lookup_status<'a>(
        &'a self,
        kind: AssessmentKind,
        identity: &'a Identity,
    ) -> BoxFuture<'a, Result<String, RemoteError>> {
        Box::pin(async move { Ok(self.test_status(kind, identity).await?) })
    }

    fn submit<'a>(
        &'a self,
        submission: &'a Submission,
    ) -> BoxFuture<'a, Result<SubmissionAck, RemoteError>> {
        Box::pin(async move { Ok(ApiClient::submit(self, submission).await?) })
    }
}

impl MessageSource for ApiClient {
    fn fetch_messages(
        &self,
        referral_id: u64,
    ) -> BoxFuture<'_, Result<Vec<ChatMessage>, RemoteError>> {
        Box::pin(async move { Ok(self.messages(referral_id).await?) })
    }
}

impl MessageSink for ApiClient {
    fn send_message<'a>(
        &'a self,
        message: &'a OutgoingMessage,
    ) -> BoxFuture<'a, Result<SubmissionAck, RemoteError>> {
        Box::pin(async move { Ok(ApiClient::send_message(self, message).await?) })
    }
}

//! Collaborators the gate calls out to. Implemented over HTTP and local
//! config by the client crates, and by in-memory fakes in tests.

use std::sync::Arc;

use wellpath_core::models::identity::Identity;
use wellpath_core::models::kind::AssessmentKind;
use wellpath_core::models::submission::{Submission, SubmissionAck};
use wellpath_core::remote::{BoxFuture, RemoteError};

/// Source of the signed-in user's identity.
pub trait IdentityProvider: Send + Sync {
    /// `None` when nobody is signed in or the stored session is unreadable.
    fn current_identity(&self) -> BoxFuture<'_, Option<Identity>>;
}

/// The two remote calls an assessment screen makes.
pub trait AssessmentApi: Send + Sync {
    /// Raw `status` string for `(kind, identity)`. The gate interprets it.
    fn lookup_status<'a>(
        &'a self,
        kind: AssessmentKind,
        identity: &'a Identity,
    ) -> BoxFuture<'a, Result<String, RemoteError>>;

    fn submit<'a>(
        &'a self,
        submission: &'a Submission,
    ) -> BoxFuture<'a, Result<SubmissionAck, RemoteError>>;
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for Arc<T> {
    fn current_identity(&self) -> BoxFuture<'_, Option<Identity>> {
        (**self).current_identity()
    }
}

impl<T: AssessmentApi + ?Sized> AssessmentApi for Arc<T> {
    fn lookup_status<'a>(
        &'a self,
        kind: AssessmentKind,
        identity: &'a Identity,
    ) -> BoxFuture<'a, Result<String, RemoteError>> {
        (**self).lookup_status(kind, identity)
    }

    fn submit<'a>(
        &'a self,
        submission: &'a Submission,
    ) -> BoxFuture<'a, Result<SubmissionAck, RemoteError>> {
        (**self).submit(submission)
    }
}

/// Identity fixed at construction. Useful for hosts that resolve the user
/// up front.
#[derive(Debug, Clone)]
pub struct StaticIdentity(pub Option<Identity>);

impl IdentityProvider for StaticIdentity {
    fn current_identity(&self) -> BoxFuture<'_, Option<Identity>> {
        let identity = self.0.clone();
        Box::pin(async move { identity })
    }
}

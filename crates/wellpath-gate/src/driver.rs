use tracing::{info, warn};
use uuid::Uuid;
use wellpath_core::models::kind::AssessmentKind;
use wellpath_core::models::status::CompletionStatus;
use wellpath_core::models::submission::SubmissionAck;
use wellpath_core::remote::RemoteError;

use crate::ports::{AssessmentApi, IdentityProvider};
use crate::state::{Activity, GateEvent, GateState, InProgress, transition};
use crate::view::GateView;

/// What a submit attempt did, for the UI to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The assessment is done; the gate is `Completed`.
    Finished,
    /// A case study was accepted and the next one (0-based) is active.
    Advanced { case: usize },
    /// The call failed or the server refused it. Answers are kept.
    Rejected(String),
    /// Nothing to submit in the current state.
    NotReady,
}

/// One assessment screen's gate. Created on screen entry, dropped on exit.
pub struct Gate<I, A> {
    id: Uuid,
    kind: AssessmentKind,
    identity: I,
    api: A,
    state: GateState,
    looked_up: bool,
}

impl<I: IdentityProvider, A: AssessmentApi> Gate<I, A> {
    pub fn new(kind: AssessmentKind, identity: I, api: A) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            identity,
            api,
            state: GateState::Loading,
            looked_up: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> AssessmentKind {
        self.kind
    }

    pub fn state(&self) -> &GateState {
        &self.state
    }

    pub fn view(&self) -> GateView {
        GateView::of(self.kind, &self.state)
    }

    /// Resolve the identity and look up completion status. Runs the lookup
    /// at most once per entry into `Loading`; later calls return the
    /// current state untouched.
    pub async fn enter(&mut self) -> &GateState {
        if self.looked_up || !matches!(self.state, GateState::Loading) {
            return &self.state;
        }
        self.looked_up = true;

        let event = self.lookup().await;
        self.apply(event);
        &self.state
    }

    /// From `Error`, go back to `Loading` and look up again. A no-op in
    /// every other state.
    pub async fn retry(&mut self) -> &GateState {
        if !matches!(self.state, GateState::Error(_)) {
            return &self.state;
        }
        self.apply(GateEvent::Retry);
        self.looked_up = false;
        self.enter().await
    }

    pub fn select_answer(&mut self, question: usize, option: usize) {
        self.apply(GateEvent::SelectAnswer { question, option });
    }

    pub fn edit_response(&mut self, prompt: usize, text: impl Into<String>) {
        self.apply(GateEvent::EditResponse {
            prompt,
            text: text.into(),
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.apply(GateEvent::DismissNotice);
    }

    /// Send the current answers. One submission call per invocation, never
    /// retried automatically. Dropping the returned future mid-call leaves
    /// the gate resubmittable with a "submission cancelled" notice.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let submission = match &self.state {
            GateState::InProgress(progress) if !progress.submitting => {
                match progress.activity.build_submission(self.kind) {
                    Some(submission) => submission,
                    None => return SubmitOutcome::NotReady,
                }
            }
            _ => return SubmitOutcome::NotReady,
        };

        self.apply(GateEvent::SubmitStarted);
        let mut in_flight = InFlight {
            gate: self,
            armed: true,
        };
        let result = in_flight.gate.api.submit(&submission).await;
        in_flight.armed = false;
        in_flight.gate.finish_submit(result)
    }

    fn finish_submit(&mut self, result: Result<SubmissionAck, RemoteError>) -> SubmitOutcome {
        let failure = match result {
            Ok(ack) if ack.is_success() => None,
            Ok(ack) => Some(ack.message.unwrap_or(ack.status)),
            Err(e) => Some(e.to_string()),
        };

        match failure {
            None => {
                self.apply(GateEvent::SubmitSucceeded);
                match &self.state {
                    GateState::InProgress(InProgress {
                        activity: Activity::Scenario(sequence),
                        ..
                    }) => SubmitOutcome::Advanced {
                        case: sequence.current_index(),
                    },
                    _ => SubmitOutcome::Finished,
                }
            }
            Some(reason) => {
                warn!(gate = %self.id, kind = %self.kind, %reason, "submission failed");
                self.apply(GateEvent::SubmitFailed(reason.clone()));
                SubmitOutcome::Rejected(reason)
            }
        }
    }

    async fn lookup(&self) -> GateEvent {
        let Some(identity) = self.identity.current_identity().await else {
            warn!(gate = %self.id, kind = %self.kind, "no identity available");
            return GateEvent::IdentityMissing;
        };

        match self.api.lookup_status(self.kind, &identity).await {
            Ok(raw) => match CompletionStatus::parse(&raw) {
                Some(status) => GateEvent::Resolved { status, identity },
                None => {
                    warn!(gate = %self.id, kind = %self.kind, status = %raw, "unrecognized completion status");
                    GateEvent::StatusUnrecognized(raw)
                }
            },
            Err(e) => {
                warn!(gate = %self.id, kind = %self.kind, error = %e, "status lookup failed");
                GateEvent::LookupFailed(e)
            }
        }
    }

    fn apply(&mut self, event: GateEvent) {
        let before = self.state.name();
        let state = std::mem::replace(&mut self.state, GateState::Loading);
        self.state = transition(self.kind, state, event);
        let after = self.state.name();
        if before != after {
            info!(gate = %self.id, kind = %self.kind, from = before, to = after, "gate transition");
        }
    }
}

const CANCELLED_NOTICE: &str = "submission cancelled";

/// Holds the gate while a submit call is awaited. If the submit future is
/// dropped before the call returns, the in-flight flag is cleared so the
/// answers stay editable and can be sent again.
struct InFlight<'g, I: IdentityProvider, A: AssessmentApi> {
    gate: &'g mut Gate<I, A>,
    armed: bool,
}

impl<I: IdentityProvider, A: AssessmentApi> Drop for InFlight<'_, I, A> {
    fn drop(&mut self) {
        if self.armed {
            warn!(gate = %self.gate.id, kind = %self.gate.kind, "submission abandoned before a reply");
            self.gate
                .apply(GateEvent::SubmitFailed(CANCELLED_NOTICE.to_string()));
        }
    }
}

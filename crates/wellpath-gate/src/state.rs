use wellpath_core::models::identity::Identity;
use wellpath_core::models::kind::AssessmentKind;
use wellpath_core::models::status::CompletionStatus;
use wellpath_core::models::submission::Submission;
use wellpath_core::remote::RemoteError;
use wellpath_session::{AssessmentSession, ScenarioSequence};

use crate::error::GateFailure;

/// What the student is working on while the gate is `InProgress`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity {
    Quiz(AssessmentSession),
    Scenario(ScenarioSequence),
}

impl Activity {
    /// A blank session, or a case sequence positioned at the first case.
    pub fn fresh(kind: AssessmentKind, identity: Identity) -> Self {
        match kind {
            AssessmentKind::PreTest | AssessmentKind::PostTest => {
                Activity::Quiz(AssessmentSession::for_kind(kind, identity))
            }
            AssessmentKind::Scenario => Activity::Scenario(ScenarioSequence::standard(identity)),
        }
    }

    /// True once there is nothing left to answer: a case sequence whose
    /// last case was accepted, or one that started with no cases at all.
    pub fn is_exhausted(&self) -> bool {
        match self {
            Activity::Quiz(_) => false,
            Activity::Scenario(sequence) => sequence.is_exhausted(),
        }
    }

    /// Payload for the next submit, or `None` when there is nothing left to
    /// send (an exhausted case sequence).
    pub fn build_submission(&self, kind: AssessmentKind) -> Option<Submission> {
        match self {
            Activity::Quiz(session) => session.build_submission().into_submission(kind),
            Activity::Scenario(sequence) => sequence.build_submission().map(Submission::Scenario),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InProgress {
    pub activity: Activity,
    /// A submission is in flight. Edits and further submits are ignored.
    pub submitting: bool,
    /// Transient message from the last failed submit, shown as a banner.
    pub notice: Option<String>,
}

impl InProgress {
    fn new(activity: Activity) -> Self {
        Self {
            activity,
            submitting: false,
            notice: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateState {
    Loading,
    InProgress(InProgress),
    Completed,
    Error(GateFailure),
}

impl GateState {
    pub fn name(&self) -> &'static str {
        match self {
            GateState::Loading => "loading",
            GateState::InProgress(_) => "in_progress",
            GateState::Completed => "completed",
            GateState::Error(_) => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, GateState::Completed)
    }
}

/// Discrete triggers the gate reacts to: lookup results, user input, and
/// submission results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateEvent {
    IdentityMissing,
    Resolved {
        status: CompletionStatus,
        identity: Identity,
    },
    StatusUnrecognized(String),
    LookupFailed(RemoteError),
    Retry,
    SelectAnswer {
        question: usize,
        option: usize,
    },
    EditResponse {
        prompt: usize,
        text: String,
    },
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(String),
    DismissNotice,
}

/// Apply one event. Events that mean nothing in the current state leave it
/// unchanged.
pub fn transition(kind: AssessmentKind, state: GateState, event: GateEvent) -> GateState {
    match (state, event) {
        (GateState::Loading, GateEvent::IdentityMissing) => {
            GateState::Error(GateFailure::IdentityUnresolved)
        }
        (GateState::Loading, GateEvent::Resolved { status, identity }) => match status {
            CompletionStatus::Completed => GateState::Completed,
            CompletionStatus::NotCompleted => settle(InProgress::new(Activity::fresh(kind, identity))),
        },
        (GateState::Loading, GateEvent::StatusUnrecognized(raw)) => {
            GateState::Error(GateFailure::UnrecognizedStatus(raw))
        }
        (GateState::Loading, GateEvent::LookupFailed(err)) => {
            GateState::Error(GateFailure::Lookup(err))
        }

        (GateState::Error(_), GateEvent::Retry) => GateState::Loading,

        (GateState::InProgress(progress), event) => in_progress(kind, progress, event),

        (state, event) => {
            tracing::debug!(%kind, state = state.name(), ?event, "event ignored");
            state
        }
    }
}

fn in_progress(kind: AssessmentKind, mut progress: InProgress, event: GateEvent) -> GateState {
    match (&mut progress.activity, event) {
        (Activity::Quiz(session), GateEvent::SelectAnswer { question, option })
            if !progress.submitting =>
        {
            session.select_answer(question, option);
        }
        (Activity::Scenario(sequence), GateEvent::EditResponse { prompt, text })
            if !progress.submitting =>
        {
            if let Some(case) = sequence.current_mut() {
                case.set_response(prompt, text);
            }
        }
        (_, GateEvent::SubmitStarted) if !progress.submitting => {
            progress.submitting = true;
            progress.notice = None;
        }
        (Activity::Quiz(_), GateEvent::SubmitSucceeded) if progress.submitting => {
            return GateState::Completed;
        }
        (Activity::Scenario(sequence), GateEvent::SubmitSucceeded) if progress.submitting => {
            sequence.advance();
            progress.submitting = false;
        }
        (_, GateEvent::SubmitFailed(message)) if progress.submitting => {
            progress.submitting = false;
            progress.notice = Some(message);
        }
        (_, GateEvent::DismissNotice) => {
            progress.notice = None;
        }
        (_, event) => {
            tracing::debug!(%kind, submitting = progress.submitting, ?event, "event ignored while in progress");
        }
    }
    settle(progress)
}

/// An activity with nothing left to answer can never be submitted again, so
/// it counts as done.
fn settle(progress: InProgress) -> GateState {
    if progress.activity.is_exhausted() {
        GateState::Completed
    } else {
        GateState::InProgress(progress)
    }
}

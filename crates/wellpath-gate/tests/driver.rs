use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use wellpath_core::models::identity::Identity;
use wellpath_core::models::kind::AssessmentKind;
use wellpath_core::models::submission::{Submission, SubmissionAck};
use wellpath_core::remote::{BoxFuture, RemoteError};
use wellpath_gate::ports::{AssessmentApi, StaticIdentity};
use wellpath_gate::{Activity, Gate, GateFailure, GateState, Phase, SubmitOutcome};

/// Scripted API: pops one canned reply per call and records submissions.
#[derive(Default)]
struct FakeApi {
    lookups: Mutex<VecDeque<Result<String, RemoteError>>>,
    submits: Mutex<VecDeque<Result<SubmissionAck, RemoteError>>>,
    lookup_calls: AtomicUsize,
    stall_next_submit: AtomicBool,
    sent: Mutex<Vec<Submission>>,
}

impl FakeApi {
    fn with_status(status: &str) -> Self {
        let api = FakeApi::default();
        api.push_lookup(Ok(status.to_string()));
        api
    }

    fn push_lookup(&self, reply: Result<String, RemoteError>) {
        self.lookups.lock().unwrap().push_back(reply);
    }

    fn push_submit(&self, reply: Result<SubmissionAck, RemoteError>) {
        self.submits.lock().unwrap().push_back(reply);
    }
}

fn ack(status: &str) -> Result<SubmissionAck, RemoteError> {
    Ok(SubmissionAck {
        status: status.to_string(),
        message: None,
    })
}

impl AssessmentApi for FakeApi {
    fn lookup_status<'a>(
        &'a self,
        _kind: AssessmentKind,
        _identity: &'a Identity,
    ) -> BoxFuture<'a, Result<String, RemoteError>> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .lookups
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RemoteError::Transport("no scripted reply".into())));
        Box::pin(async move { reply })
    }

    fn submit<'a>(
        &'a self,
        submission: &'a Submission,
    ) -> BoxFuture<'a, Result<SubmissionAck, RemoteError>> {
        self.sent.lock().unwrap().push(submission.clone());
        if self.stall_next_submit.swap(false, Ordering::SeqCst) {
            return Box::pin(std::future::pending());
        }
        let reply = self
            .submits
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RemoteError::Transport("no scripted reply".into())));
        Box::pin(async move { reply })
    }
}

fn signed_in() -> StaticIdentity {
    StaticIdentity(Some(Identity::Email("noor@school.edu".to_string())))
}

#[tokio::test]
async fn completed_status_goes_straight_to_completed() {
    let mut gate = Gate::new(AssessmentKind::PreTest, signed_in(), FakeApi::with_status("completed"));
    assert_eq!(gate.view().phase, Phase::Loading);
    assert_eq!(gate.enter().await, &GateState::Completed);
    assert_eq!(gate.submit().await, SubmitOutcome::NotReady);
}

#[tokio::test]
async fn missing_identity_is_an_error_without_any_lookup() {
    let api = FakeApi::with_status("completed");
    let mut gate = Gate::new(AssessmentKind::PreTest, StaticIdentity(None), api);
    assert_eq!(
        gate.enter().await,
        &GateState::Error(GateFailure::IdentityUnresolved)
    );
}

#[tokio::test]
async fn transport_failure_is_an_error_and_retry_recovers() {
    let api = FakeApi::default();
    api.push_lookup(Err(RemoteError::Transport("connection refused".into())));
    api.push_lookup(Ok("not_completed".into()));
    let mut gate = Gate::new(AssessmentKind::PostTest, signed_in(), api);

    assert!(matches!(
        gate.enter().await,
        GateState::Error(GateFailure::Lookup(RemoteError::Transport(_)))
    ));
    assert_eq!(gate.view().phase, Phase::Error);

    assert!(matches!(gate.retry().await, GateState::InProgress(_)));
    assert_eq!(gate.view().total, 30);
}

#[tokio::test]
async fn unrecognized_status_is_an_error() {
    let mut gate = Gate::new(AssessmentKind::PreTest, signed_in(), FakeApi::with_status("pending"));
    assert_eq!(
        gate.enter().await,
        &GateState::Error(GateFailure::UnrecognizedStatus("pending".into()))
    );
}

#[tokio::test]
async fn lookup_runs_once_per_entry() {
    let api = std::sync::Arc::new(FakeApi::with_status("not_completed"));
    let mut gate = Gate::new(AssessmentKind::PreTest, signed_in(), api.clone());
    gate.enter().await;
    gate.enter().await;
    gate.retry().await;
    assert_eq!(api.lookup_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn pre_test_submission_carries_score_and_total() {
    let api = std::sync::Arc::new(FakeApi::with_status("not_completed"));
    api.push_submit(ack("success"));
    let mut gate = Gate::new(AssessmentKind::PreTest, signed_in(), api.clone());
    gate.enter().await;

    let correct = correct_answer(&gate, 0);
    gate.select_answer(0, correct);
    gate.select_answer(1, (correct_answer(&gate, 1) + 1) % 4);
    assert_eq!(gate.view().answered, 2);

    assert_eq!(gate.submit().await, SubmitOutcome::Finished);
    assert_eq!(gate.state(), &GateState::Completed);

    let sent = api.sent.lock().unwrap();
    let Submission::PreTest(payload) = &sent[0] else {
        panic!("expected a pre-test payload, got {:?}", sent[0]);
    };
    assert_eq!(payload.user_name, "noor@school.edu");
    assert_eq!(payload.score, 1);
    assert_eq!(payload.total, 30);
}

fn correct_answer<I, A>(gate: &Gate<I, A>, question: usize) -> usize
where
    I: wellpath_gate::ports::IdentityProvider,
    A: AssessmentApi,
{
    let GateState::InProgress(progress) = gate.state() else {
        panic!("gate is not in progress");
    };
    let Activity::Quiz(session) = &progress.activity else {
        panic!("gate is not hosting a quiz");
    };
    session.questions()[question].correct_index.unwrap()
}

#[tokio::test]
async fn rejected_submission_keeps_answers_for_resubmit() {
    let api = std::sync::Arc::new(FakeApi::with_status("not_completed"));
    api.push_submit(Err(RemoteError::Status(502)));
    api.push_submit(ack("error"));
    api.push_submit(ack("success"));
    let mut gate = Gate::new(AssessmentKind::PostTest, signed_in(), api.clone());
    gate.enter().await;
    gate.select_answer(3, 1);

    assert_eq!(
        gate.submit().await,
        SubmitOutcome::Rejected("server returned HTTP 502".into())
    );
    assert_eq!(gate.view().notice.as_deref(), Some("server returned HTTP 502"));
    assert_eq!(gate.view().answered, 1);

    assert_eq!(gate.submit().await, SubmitOutcome::Rejected("error".into()));
    assert_eq!(gate.submit().await, SubmitOutcome::Finished);

    let sent = api.sent.lock().unwrap();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0], sent[2]);
    let Submission::PostTest(payload) = &sent[2] else {
        panic!("expected a post-test payload");
    };
    assert_eq!(payload.responses.len(), 30);
    assert!(!payload.responses[3].answer.is_empty());
    assert!(payload.responses[0].answer.is_empty());
}

#[tokio::test]
async fn scenario_walks_all_seven_cases() {
    let api = std::sync::Arc::new(FakeApi::with_status("not_completed"));
    for _ in 0..7 {
        api.push_submit(ack("success"));
    }
    let mut gate = Gate::new(AssessmentKind::Scenario, signed_in(), api.clone());
    gate.enter().await;
    assert_eq!(gate.view().case_count, Some(7));

    for case in 1..7 {
        gate.edit_response(0, format!("answer for case {}", case - 1));
        assert_eq!(gate.submit().await, SubmitOutcome::Advanced { case });
    }
    assert_eq!(gate.view().case_index, Some(6));
    assert_eq!(gate.view().answered, 0);

    assert_eq!(gate.submit().await, SubmitOutcome::Finished);
    assert_eq!(gate.view().phase, Phase::Completed);

    let sent = api.sent.lock().unwrap();
    assert_eq!(sent.len(), 7);
    let Submission::Scenario(first) = &sent[0] else {
        panic!("expected a scenario payload");
    };
    assert_eq!(first.username, "noor@school.edu");
    assert_eq!(first.responses[0], "answer for case 0");
}

#[tokio::test]
async fn abandoned_submit_leaves_answers_editable_and_resubmittable() {
    let api = std::sync::Arc::new(FakeApi::with_status("not_completed"));
    api.stall_next_submit.store(true, Ordering::SeqCst);
    api.push_submit(ack("success"));
    let mut gate = Gate::new(AssessmentKind::PreTest, signed_in(), api.clone());
    gate.enter().await;
    gate.select_answer(0, 1);

    let abandoned = tokio::time::timeout(Duration::from_millis(20), gate.submit()).await;
    assert!(abandoned.is_err());

    let view = gate.view();
    assert!(!view.submitting);
    assert_eq!(view.notice.as_deref(), Some("submission cancelled"));

    gate.select_answer(1, 2);
    assert_eq!(gate.view().answered, 2);

    assert_eq!(gate.submit().await, SubmitOutcome::Finished);
    assert_eq!(api.sent.lock().unwrap().len(), 2);
}

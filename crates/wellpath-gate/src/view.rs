use serde::{Deserialize, Serialize};
use ts_rs::TS;
use wellpath_core::models::kind::AssessmentKind;

use crate::state::{Activity, GateState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phase {
    Loading,
    InProgress,
    Completed,
    Error,
}

/// Flat snapshot of a gate for rendering. Carries no session internals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GateView {
    pub kind: AssessmentKind,
    pub phase: Phase,
    pub answered: usize,
    pub total: usize,
    pub case_index: Option<usize>,
    pub case_count: Option<usize>,
    pub case_title: Option<String>,
    pub submitting: bool,
    pub notice: Option<String>,
    pub error: Option<String>,
}

impl GateView {
    pub fn of(kind: AssessmentKind, state: &GateState) -> Self {
        let mut view = GateView {
            kind,
            phase: Phase::Loading,
            answered: 0,
            total: 0,
            case_index: None,
            case_count: None,
            case_title: None,
            submitting: false,
            notice: None,
            error: None,
        };

        match state {
            GateState::Loading => {}
            GateState::Completed => view.phase = Phase::Completed,
            GateState::Error(failure) => {
                view.phase = Phase::Error;
                view.error = Some(failure.to_string());
            }
            GateState::InProgress(progress) => {
                view.phase = Phase::InProgress;
                view.submitting = progress.submitting;
                view.notice = progress.notice.clone();
                match &progress.activity {
                    Activity::Quiz(session) => {
                        view.answered = session.answered_count();
                        view.total = session.total();
                    }
                    Activity::Scenario(sequence) => {
                        view.case_index = Some(sequence.current_index());
                        view.case_count = Some(sequence.len());
                        if let Some(case) = sequence.current() {
                            view.case_title = Some(case.title().to_string());
                            view.answered = case
                                .responses()
                                .iter()
                                .filter(|r| !r.trim().is_empty())
                                .count();
                            view.total = case.responses().len();
                        }
                    }
                }
            }
        }

        view
    }
}

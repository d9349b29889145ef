use serde::{Deserialize, Serialize};

use super::identity::Identity;
use super::kind::AssessmentKind;
use crate::endpoints;

/// A question paired with the text of the chosen option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub question: String,
    /// Empty when the question was left unanswered.
    pub answer: String,
}

/// Kind-neutral result of finishing a fixed-choice assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSubmission {
    pub identity: Identity,
    pub responses: Vec<ResponseEntry>,
    pub score: usize,
    pub total: usize,
}

impl QuizSubmission {
    pub fn to_pre_test(&self) -> PreTestPayload {
        PreTestPayload {
            user_name: self.identity.user_key(),
            score: self.score,
            total: self.total,
        }
    }

    pub fn to_post_test(&self) -> PostTestPayload {
        PostTestPayload {
            user_id: self.identity.user_key(),
            total_score: self.score,
            responses: self.responses.clone(),
        }
    }

    /// Wrap in the wire payload for `kind`. `None` for the scenario kind,
    /// which never produces a quiz submission.
    pub fn into_submission(self, kind: AssessmentKind) -> Option<Submission> {
        match kind {
            AssessmentKind::PreTest => Some(Submission::PreTest(self.to_pre_test())),
            AssessmentKind::PostTest => Some(Submission::PostTest(self.to_post_test())),
            AssessmentKind::Scenario => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreTestPayload {
    pub user_name: String,
    pub score: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTestPayload {
    pub user_id: String,
    pub total_score: usize,
    pub responses: Vec<ResponseEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioPayload {
    pub username: String,
    pub scenario: String,
    pub responses: [String; 4],
}

/// Everything the submission endpoints accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Submission {
    PreTest(PreTestPayload),
    PostTest(PostTestPayload),
    Scenario(ScenarioPayload),
}

impl Submission {
    pub fn kind(&self) -> AssessmentKind {
        match self {
            Submission::PreTest(_) => AssessmentKind::PreTest,
            Submission::PostTest(_) => AssessmentKind::PostTest,
            Submission::Scenario(_) => AssessmentKind::Scenario,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        endpoints::submission(self.kind())
    }
}

/// Response body of every submission endpoint. Only `status` is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SubmissionAck {
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }
}

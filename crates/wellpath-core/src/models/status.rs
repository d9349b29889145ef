use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::identity::Identity;
use super::kind::AssessmentKind;

/// Result of asking the API whether an identity has finished a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompletionStatus {
    Completed,
    NotCompleted,
}

impl CompletionStatus {
    /// Map the raw `status` string. Anything other than the two known values
    /// is `None`; callers treat that as a failed lookup.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "completed" => Some(CompletionStatus::Completed),
            "not_completed" => Some(CompletionStatus::NotCompleted),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
    pub test_kind: String,
    pub user_key: String,
}

impl StatusRequest {
    pub fn new(kind: AssessmentKind, identity: &Identity) -> Self {
        Self {
            test_kind: kind.as_str().to_string(),
            user_key: identity.user_key(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReply {
    pub status: String,
}

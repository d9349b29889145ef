use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Which assessment a screen hosts. Determines the bank shape and the
/// submission payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AssessmentKind {
    #[serde(rename = "pretest")]
    PreTest,
    #[serde(rename = "posttest")]
    PostTest,
    Scenario,
}

impl AssessmentKind {
    pub const ALL: [AssessmentKind; 3] = [
        AssessmentKind::PreTest,
        AssessmentKind::PostTest,
        AssessmentKind::Scenario,
    ];

    /// Name used on the wire and in the status lookup.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentKind::PreTest => "pretest",
            AssessmentKind::PostTest => "posttest",
            AssessmentKind::Scenario => "scenario",
        }
    }

    /// Fixed-choice kinds carry a correct answer per question and a score.
    pub fn is_scored(&self) -> bool {
        !matches!(self, AssessmentKind::Scenario)
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssessmentKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}

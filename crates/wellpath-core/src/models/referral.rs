use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

const MAX_REASON_CHARS: usize = 1000;

/// A counselor's referral of a student, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Referral {
    pub id: u64,
    pub student_id: String,
    pub counselor_id: String,
    #[serde(default)]
    pub doctor_id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub reason: String,
    pub status: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
}

/// Form a counselor fills in to open a referral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralForm {
    pub student_id: String,
    pub counselor_id: String,
    pub reason: String,
    #[serde(default)]
    pub urgency: Urgency,
}

impl ReferralForm {
    /// Trim free text and check required fields. Returns the cleaned form.
    pub fn validate(self) -> Result<Self, CoreError> {
        let student_id = self.student_id.trim().to_string();
        let counselor_id = self.counselor_id.trim().to_string();
        let reason = self.reason.trim().to_string();

        if student_id.is_empty() {
            return Err(CoreError::InvalidReferral("student id is required".into()));
        }
        if counselor_id.is_empty() {
            return Err(CoreError::InvalidReferral("counselor id is required".into()));
        }
        if reason.is_empty() {
            return Err(CoreError::InvalidReferral("reason is required".into()));
        }
        if reason.chars().count() > MAX_REASON_CHARS {
            return Err(CoreError::InvalidReferral(format!(
                "reason is longer than {MAX_REASON_CHARS} characters"
            )));
        }

        Ok(Self {
            student_id,
            counselor_id,
            reason,
            urgency: self.urgency,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralsReply {
    pub status: String,
    #[serde(default)]
    pub referrals: Vec<Referral>,
}

//! API path conventions.
//!
//! Pure string functions with no HTTP dependency. These name the PHP scripts
//! the remote API exposes, relative to the configured base URL.

use crate::models::kind::AssessmentKind;

pub fn login() -> &'static str {
    "login.php"
}

pub fn test_status() -> &'static str {
    "check_test_status.php"
}

pub fn submission(kind: AssessmentKind) -> &'static str {
    match kind {
        AssessmentKind::PreTest => "submit_pretest.php",
        AssessmentKind::PostTest => "submit_posttest.php",
        AssessmentKind::Scenario => "submit_scenario.php",
    }
}

pub fn messages() -> &'static str {
    "get_messages.php"
}

pub fn send_message() -> &'static str {
    "send_message.php"
}

pub fn referrals() -> &'static str {
    "get_referrals.php"
}

pub fn submit_referral() -> &'static str {
    "submit_referral.php"
}

/// Join a base URL and an endpoint path with exactly one slash.
pub fn join(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

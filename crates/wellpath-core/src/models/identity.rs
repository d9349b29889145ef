use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The key that scopes a user's completion status and submissions.
///
/// Older accounts are keyed by email, newer ones by the numeric id the API
/// assigns at registration. Both render to a plain string on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Identity {
    Email(String),
    UserId(u64),
}

impl Identity {
    pub fn user_key(&self) -> String {
        match self {
            Identity::Email(email) => email.clone(),
            Identity::UserId(id) => id.to_string(),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Email(email) => f.write_str(email),
            Identity::UserId(id) => write!(f, "{id}"),
        }
    }
}

impl FromStr for Identity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
            return key
                .parse()
                .map(Identity::UserId)
                .map_err(|_| CoreError::InvalidIdentity(s.to_string()));
        }
        match key.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Identity::Email(key.to_string()))
            }
            _ => Err(CoreError::InvalidIdentity(s.to_string())),
        }
    }
}

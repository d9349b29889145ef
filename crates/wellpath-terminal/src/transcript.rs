use std::collections::BTreeSet;

use eyre::{Result, eyre};
use wellpath_core::models::chat::ChatMessage;
use wellpath_core::models::referral::Referral;

/// Tracks which chat messages have already been shown. Each poll delivers
/// the full list, so only ids not seen before are rendered.
#[derive(Debug, Clone)]
pub struct Transcript {
    me: String,
    seen: BTreeSet<u64>,
}

impl Transcript {
    pub fn new(me: impl Into<String>) -> Self {
        Self {
            me: me.into(),
            seen: BTreeSet::new(),
        }
    }

    /// Render the messages not shown yet, in list order.
    pub fn fresh_lines(&mut self, messages: &[ChatMessage]) -> Vec<String> {
        messages
            .iter()
            .filter(|m| self.seen.insert(m.id))
            .map(|m| {
                let who = if m.sender_id == self.me {
                    "you"
                } else {
                    m.sender_id.as_str()
                };
                format!("[{}] {who}: {}", m.sent_at, m.message)
            })
            .collect()
    }
}

pub fn find_referral(referrals: Vec<Referral>, referral_id: u64) -> Result<Referral> {
    referrals
        .into_iter()
        .find(|r| r.id == referral_id)
        .ok_or_else(|| eyre!("referral {referral_id} not found for this account"))
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One message in a referral's conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatMessage {
    pub id: u64,
    pub referral_id: u64,
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
    /// Server-formatted timestamp, displayed as-is.
    pub sent_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub referral_id: u64,
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesReply {
    pub status: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

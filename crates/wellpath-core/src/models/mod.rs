pub mod chat;
pub mod identity;
pub mod kind;
pub mod question;
pub mod referral;
pub mod status;
pub mod submission;
pub mod user;

use thiserror::Error;
use wellpath_core::models::user::Role;
use wellpath_core::remote::RemoteError;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("referral {referral_id} has no doctor assigned yet")]
    NoDoctorAssigned { referral_id: u64 },

    #[error("{sender_id} ({role}) is not part of referral {referral_id}")]
    NotParticipant {
        referral_id: u64,
        sender_id: String,
        role: Role,
    },

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

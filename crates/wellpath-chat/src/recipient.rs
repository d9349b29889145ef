use wellpath_core::models::chat::OutgoingMessage;
use wellpath_core::models::referral::Referral;
use wellpath_core::models::user::Role;
use wellpath_core::remote::RemoteError;

use crate::error::ChatError;
use crate::source::MessageSink;

/// Who receives a message sent on `referral` by someone in `sender` role.
///
/// Students and parents talk to the counselor who opened the referral.
/// The counselor talks to the assigned doctor, who answers the counselor.
pub fn recipient_for(referral: &Referral, sender: Role) -> Result<&str, ChatError> {
    match sender {
        Role::Student | Role::Parent | Role::Doctor => Ok(&referral.counselor_id),
        Role::Counselor => referral
            .doctor_id
            .as_deref()
            .ok_or(ChatError::NoDoctorAssigned {
                referral_id: referral.id,
            }),
    }
}

fn participant_id(referral: &Referral, role: Role) -> Option<&str> {
    match role {
        Role::Student => Some(&referral.student_id),
        Role::Counselor => Some(&referral.counselor_id),
        Role::Doctor => referral.doctor_id.as_deref(),
        Role::Parent => referral.parent_id.as_deref(),
    }
}

/// Build an outgoing message after checking the sender belongs to the
/// referral in the role they claim.
pub fn compose(
    referral: &Referral,
    sender_role: Role,
    sender_id: &str,
    text: &str,
) -> Result<OutgoingMessage, ChatError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ChatError::EmptyMessage);
    }
    if participant_id(referral, sender_role) != Some(sender_id) {
        return Err(ChatError::NotParticipant {
            referral_id: referral.id,
            sender_id: sender_id.to_string(),
            role: sender_role,
        });
    }

    Ok(OutgoingMessage {
        referral_id: referral.id,
        sender_id: sender_id.to_string(),
        receiver_id: recipient_for(referral, sender_role)?.to_string(),
        message: text.to_string(),
    })
}

/// Compose and send in one step. A non-success acknowledgement is an error.
pub async fn send<S: MessageSink + ?Sized>(
    sink: &S,
    referral: &Referral,
    sender_role: Role,
    sender_id: &str,
    text: &str,
) -> Result<OutgoingMessage, ChatError> {
    let message = compose(referral, sender_role, sender_id, text)?;
    let ack = sink.send_message(&message).await?;
    if !ack.is_success() {
        return Err(RemoteError::Rejected(ack.message.unwrap_or(ack.status)).into());
    }
    tracing::debug!(
        referral = referral.id,
        to = %message.receiver_id,
        "message sent"
    );
    Ok(message)
}

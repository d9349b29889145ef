use std::sync::Mutex;

use wellpath_chat::{ChatError, MessageSink, compose, recipient_for, send};
use wellpath_core::models::chat::OutgoingMessage;
use wellpath_core::models::referral::Referral;
use wellpath_core::models::submission::SubmissionAck;
use wellpath_core::models::user::Role;
use wellpath_core::remote::{BoxFuture, RemoteError};

fn referral(doctor: Option<&str>) -> Referral {
    Referral {
        id: 14,
        student_id: "31".to_string(),
        counselor_id: "4".to_string(),
        doctor_id: doctor.map(str::to_string),
        parent_id: Some("77".to_string()),
        reason: "panic attacks before exams".to_string(),
        status: "open".to_string(),
    }
}

#[test]
fn students_and_parents_reach_the_counselor() {
    let r = referral(Some("9"));
    assert_eq!(recipient_for(&r, Role::Student).unwrap(), "4");
    assert_eq!(recipient_for(&r, Role::Parent).unwrap(), "4");
    assert_eq!(recipient_for(&r, Role::Doctor).unwrap(), "4");
}

#[test]
fn counselor_reaches_the_assigned_doctor() {
    assert_eq!(recipient_for(&referral(Some("9")), Role::Counselor).unwrap(), "9");
    assert!(matches!(
        recipient_for(&referral(None), Role::Counselor),
        Err(ChatError::NoDoctorAssigned { referral_id: 14 })
    ));
}

#[test]
fn compose_trims_and_addresses() {
    let msg = compose(&referral(Some("9")), Role::Counselor, "4", "  see you Tuesday \n").unwrap();
    assert_eq!(
        msg,
        OutgoingMessage {
            referral_id: 14,
            sender_id: "4".to_string(),
            receiver_id: "9".to_string(),
            message: "see you Tuesday".to_string(),
        }
    );
}

#[test]
fn compose_rejects_blank_and_outsiders() {
    let r = referral(Some("9"));
    assert!(matches!(compose(&r, Role::Student, "31", "   "), Err(ChatError::EmptyMessage)));
    assert!(matches!(
        compose(&r, Role::Student, "32", "hello"),
        Err(ChatError::NotParticipant { .. })
    ));
    assert!(matches!(
        compose(&referral(None), Role::Doctor, "9", "hello"),
        Err(ChatError::NotParticipant { .. })
    ));
}

struct RecordingSink {
    status: &'static str,
    sent: Mutex<Vec<OutgoingMessage>>,
}

impl MessageSink for RecordingSink {
    fn send_message<'a>(
        &'a self,
        message: &'a OutgoingMessage,
    ) -> BoxFuture<'a, Result<SubmissionAck, RemoteError>> {
        self.sent.lock().unwrap().push(message.clone());
        let status = self.status.to_string();
        Box::pin(async move {
            Ok(SubmissionAck {
                status,
                message: None,
            })
        })
    }
}

#[tokio::test]
async fn send_reports_rejections() {
    let sink = RecordingSink {
        status: "failed",
        sent: Mutex::new(Vec::new()),
    };
    let err = send(&sink, &referral(Some("9")), Role::Student, "31", "hi")
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::Remote(RemoteError::Rejected(ref s)) if s == "failed"));
    assert_eq!(sink.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn send_returns_the_delivered_message() {
    let sink = RecordingSink {
        status: "success",
        sent: Mutex::new(Vec::new()),
    };
    let sent = send(&sink, &referral(Some("9")), Role::Parent, "77", "thank you")
        .await
        .unwrap();
    assert_eq!(sent.receiver_id, "4");
}

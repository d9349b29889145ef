use wellpath_core::models::identity::Identity;
use wellpath_core::models::kind::AssessmentKind;
use wellpath_core::models::question::QuestionRecord;
use wellpath_session::AssessmentSession;

fn student() -> Identity {
    Identity::Email("lena@school.edu".to_string())
}

fn small_bank() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::choice("First", &["a", "b", "c"], 0),
        QuestionRecord::choice("Second", &["a", "b", "c"], 2),
        QuestionRecord::choice("Third", &["yes", "no"], 1),
    ]
}

#[test]
fn single_question_scoring() {
    let bank = vec![QuestionRecord::choice("Pick B", &["A", "B"], 1)];

    let session = AssessmentSession::new(student(), bank.clone());
    assert_eq!(session.compute_score(), 0);
    assert_eq!(session.total(), 1);

    let mut session = AssessmentSession::new(student(), bank.clone());
    session.select_answer(0, 1);
    assert_eq!(session.compute_score(), 1);

    let mut session = AssessmentSession::new(student(), bank);
    session.select_answer(0, 0);
    assert_eq!(session.compute_score(), 0);
}

#[test]
fn score_counts_only_matching_answers() {
    let mut session = AssessmentSession::new(student(), small_bank());
    session.select_answer(0, 0);
    session.select_answer(1, 1);
    session.select_answer(2, 1);
    assert_eq!(session.compute_score(), 2);
}

#[test]
fn reselecting_overwrites_the_previous_choice() {
    let mut session = AssessmentSession::new(student(), small_bank());
    session.select_answer(1, 2);
    session.select_answer(1, 2);
    assert_eq!(session.answered_count(), 1);
    assert_eq!(session.answer(1), Some(2));

    session.select_answer(1, 1);
    assert_eq!(session.answer(1), Some(1));
    assert_eq!(session.answered_count(), 1);
    assert_eq!(session.compute_score(), 0);
}

#[test]
fn unanswered_question_submits_empty_answer() {
    let mut session = AssessmentSession::new(student(), small_bank());
    session.select_answer(0, 0);
    session.select_answer(2, 0);

    let submission = session.build_submission();
    assert_eq!(submission.identity, student());
    assert_eq!(submission.total, 3);
    assert_eq!(submission.score, 1);
    assert_eq!(submission.responses.len(), 3);
    assert_eq!(submission.responses[0].answer, "a");
    assert_eq!(submission.responses[1].question, "Second");
    assert_eq!(submission.responses[1].answer, "");
    assert_eq!(submission.responses[2].answer, "yes");
}

#[test]
fn completion_tracks_every_question() {
    let mut session = AssessmentSession::new(student(), small_bank());
    assert!(!session.is_complete());
    for i in 0..3 {
        session.select_answer(i, 0);
    }
    assert!(session.is_complete());
    session.clear();
    assert_eq!(session.answered_count(), 0);
}

#[test]
fn sessions_over_compiled_banks() {
    let mut session = AssessmentSession::for_kind(AssessmentKind::PreTest, Identity::UserId(3));
    assert_eq!(session.total(), 30);
    for (i, q) in session.questions().to_vec().iter().enumerate() {
        session.select_answer(i, q.correct_index.unwrap());
    }
    assert_eq!(session.compute_score(), 30);
}

#[test]
#[should_panic(expected = "question index 3 out of range")]
fn out_of_range_question_fails_fast() {
    let mut session = AssessmentSession::new(student(), small_bank());
    session.select_answer(3, 0);
}

#[test]
#[should_panic(expected = "option index 2 out of range")]
fn out_of_range_option_fails_fast() {
    let mut session = AssessmentSession::new(student(), small_bank());
    session.select_answer(2, 2);
}

use std::borrow::Cow;
use std::collections::BTreeMap;

use wellpath_core::models::identity::Identity;
use wellpath_core::models::kind::AssessmentKind;
use wellpath_core::models::question::QuestionRecord;
use wellpath_core::models::submission::{QuizSubmission, ResponseEntry};

/// Answers for one fixed-choice assessment, keyed by question index.
///
/// The session is the only writer. Every key is a valid index into
/// `questions` and every value a valid option index for that question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentSession {
    identity: Identity,
    questions: Cow<'static, [QuestionRecord]>,
    answers: BTreeMap<usize, usize>,
}

impl AssessmentSession {
    pub fn new(identity: Identity, questions: impl Into<Cow<'static, [QuestionRecord]>>) -> Self {
        Self {
            identity,
            questions: questions.into(),
            answers: BTreeMap::new(),
        }
    }

    /// Start a session over the compiled-in bank for `kind`.
    pub fn for_kind(kind: AssessmentKind, identity: Identity) -> Self {
        Self::new(identity, wellpath_bank::questions_for(kind))
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    /// Record or overwrite the answer for `question`.
    ///
    /// # Panics
    ///
    /// If either index is out of range. The UI only offers valid choices,
    /// so a bad index is a bug in the caller.
    pub fn select_answer(&mut self, question: usize, option: usize) {
        let record = self.questions.get(question).unwrap_or_else(|| {
            panic!(
                "question index {question} out of range for a bank of {}",
                self.questions.len()
            )
        });
        assert!(
            option < record.options.len(),
            "option index {option} out of range for question {question} with {} options",
            record.options.len()
        );
        self.answers.insert(question, option);
    }

    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(&question).copied()
    }

    pub fn answers(&self) -> &BTreeMap<usize, usize> {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Number of questions whose stored answer matches the key.
    /// Unanswered questions count as incorrect.
    pub fn compute_score(&self) -> usize {
        self.questions
            .iter()
            .enumerate()
            .filter(|(i, q)| q.correct_index.is_some() && self.answer(*i) == q.correct_index)
            .count()
    }

    /// Pair every question with the text of its chosen option, empty when
    /// unanswered, along with the score and the identity.
    pub fn build_submission(&self) -> QuizSubmission {
        let responses = self
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| ResponseEntry {
                question: q.text.clone(),
                answer: self
                    .answer(i)
                    .and_then(|opt| q.options.get(opt))
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect();

        let submission = QuizSubmission {
            identity: self.identity.clone(),
            responses,
            score: self.compute_score(),
            total: self.total(),
        };
        tracing::debug!(
            identity = %submission.identity,
            score = submission.score,
            total = submission.total,
            answered = self.answered_count(),
            "built quiz submission"
        );
        submission
    }
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The four prompts every case study asks, in order.
pub const CASE_PROMPTS: [&str; 4] = [
    "What signs or symptoms do you notice in this situation?",
    "How do you think the person is feeling, and why?",
    "What would you say or do to help right now?",
    "Who else should be involved, and how would you reach them?",
];

/// One item in a question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionRecord {
    pub text: String,
    /// Fixed choices. Empty for free-response prompts.
    pub options: Vec<String>,
    /// Index into `options`. `None` for free-response prompts.
    pub correct_index: Option<usize>,
    /// Display grouping only; never affects scoring.
    pub section: Option<String>,
}

impl QuestionRecord {
    pub fn choice(text: &str, options: &[&str], correct_index: usize) -> Self {
        Self {
            text: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index: Some(correct_index),
            section: None,
        }
    }

    pub fn prompt(text: &str) -> Self {
        Self {
            text: text.to_string(),
            options: Vec::new(),
            correct_index: None,
            section: None,
        }
    }

    pub fn in_section(mut self, section: &str) -> Self {
        self.section = Some(section.to_string());
        self
    }

    pub fn is_free_response(&self) -> bool {
        self.correct_index.is_none()
    }

    /// Fixed-choice records need at least two options and an answer key that
    /// points at one of them. Free-response records carry no options.
    pub fn is_valid(&self) -> bool {
        match self.correct_index {
            Some(correct) => self.options.len() >= 2 && correct < self.options.len(),
            None => self.options.is_empty(),
        }
    }
}

/// A scenario unit: a short situation the student responds to with the
/// four [`CASE_PROMPTS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaseStudy {
    pub title: String,
}

impl CaseStudy {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

use std::sync::LazyLock;

use wellpath_core::models::kind::AssessmentKind;
use wellpath_core::models::question::{CASE_PROMPTS, CaseStudy, QuestionRecord};

use crate::QuestionBank;

/// Case-study responses. Seven short situations, each answered with the
/// same four free-text prompts. Nothing here is scored.
pub struct Scenario;

impl QuestionBank for Scenario {
    fn kind(&self) -> AssessmentKind {
        AssessmentKind::Scenario
    }

    fn name(&self) -> &str {
        "Scenario Responses"
    }

    /// Four prompt records per case, tagged with the case title.
    fn questions(&self) -> &'static [QuestionRecord] {
        static QUESTIONS: LazyLock<Vec<QuestionRecord>> = LazyLock::new(|| {
            cases()
                .iter()
                .flat_map(|case| {
                    CASE_PROMPTS
                        .iter()
                        .map(move |prompt| QuestionRecord::prompt(prompt).in_section(&case.title))
                })
                .collect()
        });
        &QUESTIONS
    }
}

pub fn cases() -> &'static [CaseStudy] {
    static CASES: LazyLock<Vec<CaseStudy>> = LazyLock::new(|| {
        vec![
            CaseStudy::new("Maya has stopped eating lunch with her friends and spends breaks alone in the library. Her grades have dropped over the last month."),
            CaseStudy::new("Arjun gets a racing heart and feels sick before every presentation. Last week he left class in the middle of one."),
            CaseStudy::new("Leila posted a message online saying everyone would be better off without her, then deleted it an hour later."),
            CaseStudy::new("Tom is being teased in group chats about his appearance. He has started skipping PE and says he is fine."),
            CaseStudy::new("Sara's parents recently separated. She is often tired in class, snaps at classmates and has missed homework deadlines."),
            CaseStudy::new("Daniel boasts about staying up all night gaming and drinking energy drinks. He has fallen asleep in two exams."),
            CaseStudy::new("Nadia has lost a lot of weight in a short time, wears baggy clothes and avoids eating in front of others."),
        ]
    });
    &CASES
}

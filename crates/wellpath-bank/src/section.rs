use serde::Serialize;
use wellpath_core::models::question::QuestionRecord;

/// A run of consecutive questions sharing a section tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// `None` for banks that do not declare sections.
    pub name: Option<String>,
    /// Index of the first question of this section within the bank.
    pub start: usize,
    pub questions: &'static [QuestionRecord],
}

impl Section {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Bank indices covered by this section.
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.questions.len()
    }
}

pub(crate) fn group(questions: &'static [QuestionRecord]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut start = 0;

    while start < questions.len() {
        let name = questions[start].section.clone();
        let run = questions[start..]
            .iter()
            .take_while(|q| q.section == name)
            .count();
        sections.push(Section {
            name,
            start,
            questions: &questions[start..start + run],
        });
        start += run;
    }

    sections
}

//! wellpath-bank
//!
//! Compiled-in question banks. Pure data, no network dependency.
//! Each bank is an ordered, immutable list of question records for one
//! assessment kind.

pub mod banks;
pub mod error;
pub mod section;

use wellpath_core::models::kind::AssessmentKind;
use wellpath_core::models::question::{CaseStudy, QuestionRecord};

use error::BankError;
use section::Section;

/// Trait implemented by each compiled-in bank.
pub trait QuestionBank: Send + Sync {
    /// The assessment kind this bank backs.
    fn kind(&self) -> AssessmentKind;

    /// Human-readable name (e.g., "Pre-Test").
    fn name(&self) -> &str;

    /// Every question in presentation order.
    fn questions(&self) -> &'static [QuestionRecord];

    /// Group questions by their `section` tag, keeping bank order.
    ///
    /// A bank without section tags yields one unnamed group.
    fn sections(&self) -> Vec<Section> {
        section::group(self.questions())
    }
}

/// Return all registered banks.
pub fn all_banks() -> Vec<Box<dyn QuestionBank>> {
    vec![
        Box::new(banks::pre_test::PreTest),
        Box::new(banks::post_test::PostTest),
        Box::new(banks::scenario::Scenario),
    ]
}

pub fn bank_for(kind: AssessmentKind) -> Box<dyn QuestionBank> {
    match kind {
        AssessmentKind::PreTest => Box::new(banks::pre_test::PreTest),
        AssessmentKind::PostTest => Box::new(banks::post_test::PostTest),
        AssessmentKind::Scenario => Box::new(banks::scenario::Scenario),
    }
}

/// Look up a bank by its wire name (`pretest`, `posttest`, `scenario`).
pub fn get_bank(name: &str) -> Result<Box<dyn QuestionBank>, BankError> {
    name.parse::<AssessmentKind>()
        .map(bank_for)
        .map_err(|_| BankError::UnknownBank(name.to_string()))
}

pub fn questions_for(kind: AssessmentKind) -> &'static [QuestionRecord] {
    bank_for(kind).questions()
}

pub fn sections_of(kind: AssessmentKind) -> Vec<Section> {
    bank_for(kind).sections()
}

/// The ordered case studies behind the scenario bank.
pub fn case_studies() -> &'static [CaseStudy] {
    banks::scenario::cases()
}

use std::borrow::Cow;

use wellpath_core::models::identity::Identity;
use wellpath_core::models::question::{CASE_PROMPTS, CaseStudy};
use wellpath_core::models::submission::ScenarioPayload;

/// The case currently on screen, with the student's four free-text answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioCase {
    title: String,
    responses: [String; 4],
}

impl ScenarioCase {
    pub fn new(study: &CaseStudy) -> Self {
        Self {
            title: study.title.clone(),
            responses: Default::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &'static [&'static str; 4] {
        &CASE_PROMPTS
    }

    pub fn responses(&self) -> &[String; 4] {
        &self.responses
    }

    /// # Panics
    ///
    /// If `prompt` is not one of the four prompt positions.
    pub fn set_response(&mut self, prompt: usize, text: impl Into<String>) {
        assert!(
            prompt < self.responses.len(),
            "prompt index {prompt} out of range for a case of {} prompts",
            self.responses.len()
        );
        self.responses[prompt] = text.into();
    }

    /// Every prompt has a non-blank response.
    pub fn is_complete(&self) -> bool {
        self.responses.iter().all(|r| !r.trim().is_empty())
    }

    pub fn build_submission(&self, identity: &Identity) -> ScenarioPayload {
        ScenarioPayload {
            username: identity.user_key(),
            scenario: self.title.clone(),
            responses: self.responses.clone(),
        }
    }
}

/// Walks an ordered list of case studies one at a time.
///
/// Exactly one case is active until the last one is retired; after that
/// the sequence is exhausted and `current` returns `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioSequence {
    identity: Identity,
    cases: Cow<'static, [CaseStudy]>,
    index: usize,
    active: Option<ScenarioCase>,
}

impl ScenarioSequence {
    pub fn new(identity: Identity, cases: impl Into<Cow<'static, [CaseStudy]>>) -> Self {
        let cases = cases.into();
        let active = cases.first().map(ScenarioCase::new);
        Self {
            identity,
            cases,
            index: 0,
            active,
        }
    }

    /// Start over the compiled-in case studies.
    pub fn standard(identity: Identity) -> Self {
        Self::new(identity, wellpath_bank::case_studies())
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// 0-based position of the active case.
    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn current(&self) -> Option<&ScenarioCase> {
        self.active.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut ScenarioCase> {
        self.active.as_mut()
    }

    pub fn is_exhausted(&self) -> bool {
        self.active.is_none()
    }

    /// Payload for the active case, or `None` once exhausted.
    pub fn build_submission(&self) -> Option<ScenarioPayload> {
        self.active
            .as_ref()
            .map(|case| case.build_submission(&self.identity))
    }

    /// Retire the active case and load the next one. Returns `true` when
    /// there is nothing left to answer.
    pub fn advance(&mut self) -> bool {
        if self.active.is_none() {
            return true;
        }
        self.index += 1;
        self.active = self.cases.get(self.index).map(ScenarioCase::new);
        tracing::debug!(
            identity = %self.identity,
            index = self.index,
            total = self.cases.len(),
            "advanced scenario sequence"
        );
        self.active.is_none()
    }
}

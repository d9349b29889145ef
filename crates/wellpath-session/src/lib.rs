//! wellpath-session
//!
//! In-progress assessment state: answer accumulation, scoring, and
//! submission payload construction. Owns no IO; the gate decides when and
//! where a payload is sent.

pub mod quiz;
pub mod scenario;

pub use quiz::AssessmentSession;
pub use scenario::{ScenarioCase, ScenarioSequence};

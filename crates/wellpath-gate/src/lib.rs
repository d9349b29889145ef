//! wellpath-gate
//!
//! The screen-level state machine that decides whether an assessment shows
//! a spinner, a retry prompt, a completed message, or the live quiz.
//!
//! [`state::transition`] is a pure function over immutable snapshots and
//! carries every rule. [`driver::Gate`] performs the two remote calls
//! (status lookup and submission) through the traits in [`ports`] and
//! feeds their results back in as events.

pub mod driver;
pub mod error;
pub mod ports;
pub mod state;
pub mod view;

pub use driver::{Gate, SubmitOutcome};
pub use error::GateFailure;
pub use state::{Activity, GateEvent, GateState, InProgress, transition};
pub use view::{GateView, Phase};

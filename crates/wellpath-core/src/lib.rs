//! wellpath-core
//!
//! Pure domain types, wire payloads, and API endpoint conventions.
//! No HTTP dependency. This is the shared vocabulary of the Wellpath client.

pub mod endpoints;
pub mod error;
pub mod models;
pub mod remote;

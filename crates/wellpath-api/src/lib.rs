//! wellpath-api
//!
//! HTTP client for the school's PHP JSON API. Thin wrapper around reqwest
//! that also backs the gate and chat collaborator traits.

pub mod client;
pub mod error;
mod ports;

pub use client::ApiClient;
pub use error::ApiError;

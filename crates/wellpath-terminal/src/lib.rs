//! wellpath-terminal library root.
//!
//! Re-exports the pieces of the terminal host that do not touch stdin or
//! the network, so integration tests can exercise them without going
//! through the command layer.

pub mod config;
pub mod identity;
pub mod transcript;

/// `EnvFilter` directive used when `RUST_LOG` is unset.
pub fn default_log_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

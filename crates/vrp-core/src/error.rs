//! Solver error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `VrpError` via `From` impls, or keep them separate and wrap `VrpError` as
//! one variant.  Both patterns are acceptable; prefer whichever keeps error
//! sites clean.

use thiserror::Error;

/// The top-level error type for `vrp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum VrpError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("instance error: {0}")]
    Instance(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `vrp-*` crates.
pub type VrpResult<T> = Result<T, VrpError>;

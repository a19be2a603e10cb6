//! Error types for gen-art
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! All variants are fatal: the batch loop aborts on the first failure and
//! propagates it to the process boundary. There are no retries — render
//! failures are deterministic given the seed.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gen-art operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failure raised inside a render routine.
///
/// Routines report failures as plain messages; the engine wraps them in
/// [`Error::Render`] together with the failing sample index.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct RenderFailure(
    /// The failure message
    pub String,
);

impl RenderFailure {
    /// Convenience constructor from anything displayable.
    pub fn msg(message: impl std::fmt::Display) -> Self {
        RenderFailure(message.to_string())
    }
}

/// Error types for gen-art
#[derive(Debug, Error)]
pub enum Error {
    /// No parameter-space declaration found in the script
    #[error("no parameter-space declaration in {path}: {reason}")]
    MissingSpec {
        /// Path of the offending script
        path: PathBuf,
        /// What exactly was missing (doc block vs. structured sub-block)
        reason: String,
    },

    /// Declaration present but invalid (bad YAML, inconsistent bounds/choices)
    #[error("malformed parameter-space declaration: {0}")]
    MalformedSpec(String),

    /// The script names a render routine that is not registered
    #[error("unknown render routine: {name}")]
    UnknownRoutine {
        /// The entry-point name the script asked for
        name: String,
    },

    /// Render routine failed for a specific sample
    #[error("render failed for sample {index}")]
    Render {
        /// Index of the failing sample
        index: u64,
        /// Underlying failure from the routine
        #[source]
        source: RenderFailure,
    },

    /// Image encoding failed
    #[error("image encoding failed: {0}")]
    Encode(String),

    /// I/O error (reading scripts, writing images)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

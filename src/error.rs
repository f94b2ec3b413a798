//! Error types for the word-frequency counter and the drivers.
//!
//! The rain calculator has no runtime errors: out-of-range thresholds are
//! handled by a defined boundary policy, not a failure path.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CountError {
    /// The input source could not be opened or read. No partial result is
    /// produced.
    #[error("input unavailable: {path}: {source}")]
    InputUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A caller-supplied argument is outside its domain (e.g. n = 0 words
    /// requested).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type CountResult<T> = Result<T, CountError>;

//! Core error types.
//!
//! One taxonomy for the whole core so callers can classify failures
//! without string matching: bad caller input, an exhausted generation
//! budget, and the codec/file errors hit while grading.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the core.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the mathforge core.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied parameter was out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The retry budget ran out at some recursion level.
    ///
    /// Carries the numeric range in force so the caller can suggest
    /// widening it.
    #[error("could not generate a valid expression, widen the numeric range (r={range})")]
    GenerationExhausted { range: i64 },

    /// A zero divisor reached the value layer.
    ///
    /// The generator rejects zero divisors before dividing, so seeing
    /// this outside the generator's retry loop is an invariant violation.
    #[error("division by zero")]
    DivisionByZero,

    /// Answer text matched none of the accepted notations.
    #[error("invalid answer format: {0:?}")]
    InvalidAnswerFormat(String),

    /// A reference or submission file does not exist.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` for errors the generator's retry loop may absorb.
    ///
    /// Everything else propagates to the caller immediately.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::DivisionByZero)
    }
}

//! Error types for character creation.

use thiserror::Error;

use cs_core::{Attribute, CoreError};
use cs_mechanics::MechError;

/// Result type for creation operations.
pub type CreationResult<T> = Result<T, CreationError>;

/// Errors that can end a creation run early.
///
/// Malformed answers are not errors; they are re-asked. These cover the
/// cases where asking again cannot help.
#[derive(Debug, Error)]
pub enum CreationError {
    /// Reading the answer or writing the prompt failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while a prompt was waiting for an answer.
    #[error("input closed while waiting for \"{prompt}\"")]
    InputClosed {
        /// The prompt that was left unanswered, trimmed.
        prompt: String,
    },

    /// A prompt received too many invalid answers in a row.
    #[error("gave up on \"{prompt}\" after {attempts} invalid answers")]
    RetriesExhausted {
        /// The prompt that was given up on, trimmed.
        prompt: String,
        /// Invalid answers received before giving up.
        attempts: u32,
    },

    /// An attribute was left with no rolled score to take.
    #[error("no scores left to assign to {0}")]
    PoolExhausted(Attribute),

    /// Character data was rejected by the model.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Rolling the score pool failed.
    #[error(transparent)]
    Mech(#[from] MechError),
}

//! Error types for the dice mechanics.

/// Errors that can occur during mechanics operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// A scripted dice source was given no faces to replay.
    #[error("scripted dice need at least one face")]
    EmptyScript,

    /// A scripted face value that no die can show.
    #[error("invalid die face: {0}")]
    InvalidFace(u32),

    /// Dropping the lowest and highest die needs at least three dice.
    #[error("need at least 3 dice to drop extremes, got {0}")]
    TooFewDice(usize),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;

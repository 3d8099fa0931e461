//! Error types for the character model.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building or parsing character data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A race name that is not in the race list.
    #[error("unknown race: {0}")]
    UnknownRace(String),

    /// A class name that is not in the class list.
    #[error("unknown class: {0}")]
    UnknownRole(String),

    /// A score block was built without a value for this attribute.
    #[error("missing score for {0}")]
    MissingAttribute(crate::Attribute),

    /// A score block was given two values for this attribute.
    #[error("{0} assigned more than once")]
    DuplicateAttribute(crate::Attribute),

    /// An age that is not made of digits only.
    #[error("invalid age: \"{0}\"")]
    InvalidAge(String),

    /// A sex code other than M or F.
    #[error("invalid sex: \"{0}\"")]
    InvalidSex(String),
}

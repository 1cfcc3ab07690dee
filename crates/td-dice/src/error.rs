//! Error types for dice rolling.

use td_random::RequestError;

/// Errors that can occur while rolling.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// The source produced no usable values; holds its alert.
    #[error("{0}")]
    NoValues(String),

    /// The source returned a different number of values than asked for.
    #[error("expected {expected} values, got {got}")]
    WrongCount {
        /// Values requested.
        expected: usize,
        /// Values received.
        got: usize,
    },

    /// A value could not be read as a die face.
    #[error("not a die face: {0}")]
    NotAFace(String),

    /// The request behind the roll was rejected.
    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;

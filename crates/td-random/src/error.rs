//! Error types for the random source.

/// Configuration errors raised before any network call or local generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The request kind is not one of integers, sequences, or strings.
    #[error("unknown request kind: {0}")]
    UnknownKind(String),

    /// A numeric field lies outside the range the service accepts.
    #[error("{field} must be in [{min}, {max}], got {value}")]
    OutOfRange {
        /// Name of the offending field (`num`, `min`, `len`, ...).
        field: &'static str,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
        /// The rejected value.
        value: i64,
    },

    /// The lower bound is greater than the upper bound.
    #[error("min ({min}) must not exceed max ({max})")]
    InvertedBounds {
        /// Requested lower bound.
        min: i64,
        /// Requested upper bound.
        max: i64,
    },

    /// A sequence request spans more values than the service will permute.
    #[error("sequence range spans {0} values, at most 10000 are allowed")]
    SequenceTooLong(i64),

    /// A string request disabled digits, uppercase, and lowercase letters.
    #[error("string alphabet is empty: enable digits, upperalpha, or loweralpha")]
    EmptyAlphabet,

    /// The output base is not 2, 8, 10, or 16.
    #[error("unsupported base: {0}")]
    UnsupportedBase(u32),

    /// A randomization identifier could not be parsed.
    #[error("invalid randomization: {0}")]
    InvalidRandomization(String),
}

/// Convenience result type for request construction and validation.
pub type RequestResult<T> = Result<T, RequestError>;

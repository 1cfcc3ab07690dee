//! Error types for the terminal roller.

use td_random::TransportError;
use thiserror::Error;

/// Result type for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;

/// Errors that can occur while running the roller.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Terminal setup, drawing, or input failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Settings could not be written.
    #[error("settings error: {0}")]
    Settings(String),

    /// The clipboard program failed.
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// The speech program failed.
    #[error("speech error: {0}")]
    Speech(String),

    /// The HTTP client could not be built.
    #[error("random source error: {0}")]
    Source(#[from] TransportError),

    /// The log subscriber could not be installed.
    #[error("logging error: {0}")]
    Logging(String),
}

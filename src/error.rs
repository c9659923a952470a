//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur while reading player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input stream has no further lines.
    #[error("input stream closed")]
    Closed,
    /// Reading from the terminal failed.
    #[cfg(feature = "std")]
    #[error("failed to read input: {0}")]
    Io(std::io::ErrorKind),
}

/// Error returned when a line is neither a hit nor a stand choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected 'h' to hit or 's' to stand")]
pub struct ParseChoiceError;

/// Errors that can occur while running a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The requested step does not match the current game state.
    #[error("invalid game state for this step")]
    InvalidState,
    /// Player input could not be read while a choice was required.
    #[error("failed to read player input: {0}")]
    Input(#[from] InputError),
}

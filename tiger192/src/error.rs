use thiserror::Error;

/// Error returned when text cannot be parsed as a [`Digest`](crate::Digest).
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseDigestError {
    /// The input was not exactly 48 characters long.
    #[error("invalid digest length: expected 48 hex digits, got {0}")]
    InvalidLength(usize),

    /// A character at the given byte offset is not a hex digit.
    #[error("invalid hex character {character:?} at offset {index}")]
    InvalidCharacter { character: char, index: usize },
}

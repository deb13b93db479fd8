//! Error types for the bounded containers.

use thiserror::Error;

/// Result type alias for container operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the bounded containers and [`BigInteger`](crate::BigInteger).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An insertion would grow the container past its maximum length.
    #[error("container already contains {max_len} elements")]
    CapacityExceeded {
        /// The configured maximum length.
        max_len: usize,
    },

    /// A pop or peek on a container with no elements.
    #[error("container is empty")]
    Empty,

    /// A character outside `'0'..='9'` was found while parsing digits.
    #[error("argument contains non-numeric character {found:?} at position {position}")]
    InvalidDigit {
        /// The character offset of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },
}

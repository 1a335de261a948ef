//! Domain error types.

use thiserror::Error;

use crate::id::DraftId;

/// Top-level domain error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// A required field is missing or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No draft exists for the identifier.
    #[error("draft {0} does not exist")]
    NotFound(DraftId),

    /// The requested pick is not among the remaining options.
    #[error("option '{0}' is not available")]
    UnknownOption(String),

    /// The draft has finished and accepts no further picks.
    #[error("draft {0} is already complete")]
    DraftComplete(DraftId),

    /// The claimed picker is not the drafter whose turn it is.
    #[error("it is {expected}'s turn, not {claimed}'s")]
    NotYourTurn {
        /// The name submitted with the pick.
        claimed: String,
        /// The drafter whose turn it actually is.
        expected: String,
    },

    /// A storage-level failure.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

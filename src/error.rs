//! Errors reported by the rules engine.
//!
//! Every error is returned to the immediate caller of the offending operation
//! and none of them leave the board in a partially updated state.

use crate::chess::core::Square;

/// Failure of a rules engine operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Raw input could not be turned into a file, a rank or a square.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
    /// The move violates ownership, occupancy or the rules of the moving
    /// piece. The board is left untouched.
    #[error("illegal move {from}{to}: {reason}")]
    IllegalMove {
        #[allow(missing_docs)]
        from: Square,
        #[allow(missing_docs)]
        to: Square,
        #[allow(missing_docs)]
        reason: &'static str,
    },
    /// The operation is not available in the current game phase.
    #[error("illegal state: {0}")]
    IllegalState(&'static str),
    /// A persisted game can not be restored as is.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Shorthand for results of the rules engine operations.
pub type Result<T> = std::result::Result<T, Error>;

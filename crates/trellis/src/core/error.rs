//! Error types for the crate.

use thiserror::Error;

/// Errors that can occur in this crate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A user-assigned widget id is already registered to another node.
    #[error("duplicate widget id: {0}")]
    DuplicateId(String),

    /// A node handle does not refer to a live node.
    #[error("unknown node")]
    UnknownNode,

    /// An invalid operation was attempted.
    #[error("invalid operation: {0}")]
    Invalid(String),

    /// An internal inconsistency. These indicate a bug in the crate.
    #[error("internal error: {0}")]
    Internal(String),
}

/// A result that uses our standard error type.
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for seeddb
//!
//! This module defines the error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::types::RecordId;
use thiserror::Error;

/// Result type alias for seeddb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the seeddb store
///
/// The store has exactly one recoverable failure: inserting a record whose
/// (kind, identifier) pair is already present. Lookups and filters are
/// total and report absence through `Option` / empty sequences instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A record of this kind already holds this identifier
    #[error("duplicate identifier {id} for kind {kind}")]
    DuplicateId {
        /// Kind name of the rejected record
        kind: &'static str,
        /// Identifier already in use within the kind
        id: RecordId,
    },
}

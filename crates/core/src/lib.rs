//! Core types and traits for seeddb
//!
//! This crate defines the foundational pieces used throughout the system:
//! - RecordId: Integer identifier, unique within a kind
//! - Storable: The contract a record kind implements to participate in the store
//! - ValueSource: Injected capability producing pseudo-random primitive values
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use traits::{Storable, ValueSource};
pub use types::RecordId;

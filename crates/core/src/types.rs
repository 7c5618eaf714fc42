//! Core types for seeddb
//!
//! This module defines RecordId, the integer identifier carried by every
//! stored record. Identifiers are unique within a kind; two records of
//! different kinds may share the same numeric value without conflict.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer identifier for a stored record
///
/// A RecordId is a wrapper around a `u64`, unique within its kind. The
/// store assigns RecordIds sequentially during bulk generation and
/// enforces uniqueness on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(u64);

impl RecordId {
    /// Create a RecordId from a raw integer
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value of this RecordId
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<RecordId> for u64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_roundtrip() {
        let id = RecordId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(u64::from(id), 42);
        assert_eq!(RecordId::from(42u64), id);
    }

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId::new(90).to_string(), "90");
    }

    #[test]
    fn test_record_id_ordering() {
        assert!(RecordId::new(1) < RecordId::new(2));
        assert_eq!(RecordId::new(7), RecordId::new(7));
    }

    #[test]
    fn test_record_id_hashable() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(RecordId::new(1));
        set.insert(RecordId::new(1));
        set.insert(RecordId::new(2));
        assert_eq!(set.len(), 2);
    }
}

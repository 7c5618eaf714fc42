//! Per-kind partition: insertion-ordered records behind an id index

use rustc_hash::FxHashMap;
use seeddb_core::{Error, RecordId, Result, Storable};
use std::fmt;

/// Records of a single kind
///
/// Holds the kind's records in insertion order plus an identifier index
/// for O(1) lookup. The `next_id` counter stays one past the highest
/// identifier ever stored here, so generated identifiers never collide
/// with manually inserted ones.
pub(crate) struct Partition<T> {
    /// Records in insertion order
    records: Vec<T>,
    /// RecordId -> position in `records`
    index: FxHashMap<RecordId, usize>,
    /// Next identifier handed out to generated records
    next_id: u64,
}

impl<T> Partition<T> {
    pub(crate) fn new() -> Self {
        Self {
            records: Vec::new(),
            index: FxHashMap::default(),
            next_id: 1,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }
}

impl<T: Storable> Partition<T> {
    /// Insert a fully-specified record, rejecting duplicate identifiers
    ///
    /// On success returns a clone of the stored record and advances the
    /// id counter past the inserted identifier. On failure the partition
    /// is untouched.
    pub(crate) fn insert(&mut self, record: T) -> Result<T> {
        let id = record.record_id();
        if self.index.contains_key(&id) {
            return Err(Error::DuplicateId {
                kind: T::kind(),
                id,
            });
        }
        self.index.insert(id, self.records.len());
        if id.get() >= self.next_id {
            self.next_id = id.get() + 1;
        }
        let stored = record.clone();
        self.records.push(record);
        Ok(stored)
    }

    /// Take the next generated identifier, advancing the counter
    pub(crate) fn reserve_id(&mut self) -> RecordId {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn get(&self, id: RecordId) -> Option<&T> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    pub(crate) fn contains(&self, id: RecordId) -> bool {
        self.index.contains_key(&id)
    }
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Partition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partition")
            .field("len", &self.records.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

//! The type-partitioned store

use crate::partition::Partition;
use rustc_hash::FxHashMap;
use seeddb_core::{Result, Storable, ValueSource};
use seeddb_gen::SeededValues;
use std::any::{Any, TypeId};
use std::fmt;
use tracing::{debug, trace, warn};

/// In-memory, type-partitioned object store for seeding fake data
///
/// The store owns one [`Partition`] per record kind, keyed by the kind's
/// `TypeId`, plus the injected [`ValueSource`] that record generation
/// draws attribute values from. Partitions are created lazily on first
/// use and live until the store is dropped or [`Store::reset`] is called.
///
/// # Ownership
///
/// The store is the sole owner of all stored records. Every read returns
/// an owned clone; no operation hands out references aliasing internal
/// sequences. Mutation takes `&mut self`, so a single coordinating owner
/// drives the store without any internal locking. Hosts that need
/// cross-thread access wrap the store in their own mutex.
///
/// # Example
///
/// ```
/// use seeddb_core::{RecordId, Storable, ValueSource};
/// use seeddb_store::Store;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct User {
///     id: u64,
///     name: String,
/// }
///
/// impl Storable for User {
///     fn generate(id: RecordId, values: &mut dyn ValueSource) -> Self {
///         Self { id: id.get(), name: values.next_string(8) }
///     }
///
///     fn record_id(&self) -> RecordId {
///         RecordId::new(self.id)
///     }
/// }
///
/// let mut store = Store::with_seed(42);
/// store.create::<User>(20);
///
/// let first = store.find::<User>(1).unwrap();
/// assert_eq!(first.id, 1);
/// ```
pub struct Store {
    /// One partition per kind, keyed by the kind's TypeId
    partitions: FxHashMap<TypeId, Box<dyn Any>>,
    /// Injected pseudo-random value capability
    values: Box<dyn ValueSource>,
}

impl Store {
    /// Create a store whose value source is seeded from system entropy
    pub fn new() -> Self {
        Self::with_source(Box::new(SeededValues::from_entropy()))
    }

    /// Create a store that deterministically replays from `seed`
    ///
    /// Two stores built from the same seed generate identical records for
    /// the same sequence of `create` calls.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_source(Box::new(SeededValues::from_seed(seed)))
    }

    /// Create a store around a caller-supplied value source
    pub fn with_source(values: Box<dyn ValueSource>) -> Self {
        Self {
            partitions: FxHashMap::default(),
            values,
        }
    }

    /// Generate `count` records of kind `T` and append them to its partition
    ///
    /// Identifiers are assigned sequentially, starting one past the highest
    /// identifier ever used for the kind, and every other attribute is
    /// drawn from the value source via [`Storable::generate`]. A `count`
    /// of zero is a no-op. Never fails.
    pub fn create<T: Storable>(&mut self, count: usize) {
        let Self { partitions, values } = self;
        let partition = Self::partition_entry::<T>(partitions);
        for _ in 0..count {
            let id = partition.reserve_id();
            let record = T::generate(id, values.as_mut());
            debug_assert_eq!(
                record.record_id(),
                id,
                "generate must keep the assigned identifier"
            );
            if let Err(error) = partition.insert(record) {
                // a kind that rewrites its assigned id can collide; keep
                // the uniqueness invariant and drop the record
                warn!(target: "seeddb::store", %error, "generated record dropped");
            }
        }
        debug!(
            target: "seeddb::store",
            kind = T::kind(),
            count,
            total = partition.len(),
            "records generated"
        );
    }

    /// Store one fully-specified record under its kind and identifier
    ///
    /// Returns a clone of the stored record. Fails with
    /// [`seeddb_core::Error::DuplicateId`] when a record of the same kind
    /// already holds the identifier; the store is left unchanged in that
    /// case.
    pub fn insert<T: Storable>(&mut self, record: T) -> Result<T> {
        let partition = Self::partition_entry::<T>(&mut self.partitions);
        let stored = partition.insert(record)?;
        debug!(
            target: "seeddb::store",
            kind = T::kind(),
            id = %stored.record_id(),
            "record inserted"
        );
        Ok(stored)
    }

    /// Look up the record of kind `T` with identifier `id`
    ///
    /// Returns a clone, or `None` if the identifier is absent or the kind
    /// has never been populated. O(1) via the partition's id index.
    pub fn find<T: Storable>(&self, id: u64) -> Option<T> {
        trace!(target: "seeddb::store", kind = T::kind(), id, "point lookup");
        self.partition::<T>()?.get(id.into()).cloned()
    }

    /// Collect clones of every `T` record satisfying `predicate`
    ///
    /// The predicate is evaluated exactly once per record, in insertion
    /// order, against the partition as it stands at call time. An
    /// unpopulated kind yields an empty vector.
    pub fn filter<T, P>(&self, mut predicate: P) -> Vec<T>
    where
        T: Storable,
        P: FnMut(&T) -> bool,
    {
        trace!(target: "seeddb::store", kind = T::kind(), "filter scan");
        let Some(partition) = self.partition::<T>() else {
            return Vec::new();
        };
        let mut matched = Vec::new();
        for record in partition.iter() {
            if predicate(record) {
                matched.push(record.clone());
            }
        }
        matched
    }

    /// Clones of every `T` record, in insertion order
    pub fn all<T: Storable>(&self) -> Vec<T> {
        match self.partition::<T>() {
            Some(partition) => partition.iter().cloned().collect(),
            None => Vec::new(),
        }
    }

    /// Number of stored `T` records
    pub fn count<T: Storable>(&self) -> usize {
        self.partition::<T>().map_or(0, Partition::len)
    }

    /// Whether a `T` record with identifier `id` is present
    pub fn contains<T: Storable>(&self, id: u64) -> bool {
        self.partition::<T>()
            .is_some_and(|partition| partition.contains(id.into()))
    }

    /// Number of kinds that have ever been populated
    pub fn kind_count(&self) -> usize {
        self.partitions.len()
    }

    /// Drop every partition, keeping the value source
    ///
    /// Identifier counters restart per kind, exactly as if the store had
    /// been rebuilt.
    pub fn reset(&mut self) {
        let dropped = self.partitions.len();
        self.partitions.clear();
        debug!(target: "seeddb::store", kinds = dropped, "store reset");
    }

    fn partition<T: Storable>(&self) -> Option<&Partition<T>> {
        self.partitions
            .get(&TypeId::of::<T>())
            .and_then(|partition| partition.downcast_ref())
    }

    fn partition_entry<T: Storable>(
        partitions: &mut FxHashMap<TypeId, Box<dyn Any>>,
    ) -> &mut Partition<T> {
        partitions
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(Partition::<T>::new()))
            .downcast_mut()
            .expect("partition stored under TypeId::of::<T> is a Partition<T>")
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("kind_count", &self.kind_count())
            .finish()
    }
}

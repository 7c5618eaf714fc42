//! seeddb: a type-partitioned in-memory store for deterministic fake data
//!
//! seeddb seeds synthetic records for tests: bulk generation of a kind,
//! single-record insertion with identifier-uniqueness enforcement, point
//! lookup by (kind, identifier), and predicate filtering within a kind.
//! Partitions are keyed by the record's Rust type; identifiers are unique
//! only within their kind.
//!
//! A kind participates by implementing [`Storable`]: synthesis from an
//! identifier alone (attributes drawn from the injected [`ValueSource`])
//! plus ordinary struct construction. Seed the store for reproducible
//! data, or let it draw from entropy.
//!
//! # Example
//!
//! ```
//! use seeddb::{RecordId, Storable, Store, ValueSource};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct User {
//!     id: u64,
//!     first_name: String,
//!     last_name: String,
//! }
//!
//! impl Storable for User {
//!     fn generate(id: RecordId, values: &mut dyn ValueSource) -> Self {
//!         Self {
//!             id: id.get(),
//!             first_name: values.next_string(8),
//!             last_name: values.next_string(10),
//!         }
//!     }
//!
//!     fn record_id(&self) -> RecordId {
//!         RecordId::new(self.id)
//!     }
//! }
//!
//! let mut store = Store::with_seed(42);
//! store.create::<User>(20);
//! assert_eq!(store.find::<User>(1).unwrap().id, 1);
//!
//! let hector = User {
//!     id: 90,
//!     first_name: "Hector".to_string(),
//!     last_name: "Zarco".to_string(),
//! };
//! store.insert(hector).unwrap();
//!
//! let matches = store.filter::<User, _>(|user| user.last_name == "Zarco");
//! assert_eq!(matches.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use seeddb_core::{Error, RecordId, Result, Storable, ValueSource};
pub use seeddb_gen::{SeededValues, ValueSourceExt};
pub use seeddb_store::Store;

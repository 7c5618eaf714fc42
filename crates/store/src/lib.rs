//! Type-partitioned in-memory store for deterministic fake data
//!
//! The [`Store`] owns one partition per record kind, keyed by the kind's
//! `TypeId`. Each partition keeps its records in insertion order behind an
//! identifier index, so point lookups are O(1) while iteration and
//! filtering see records in the order they were stored.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod partition;
mod store;

pub use store::Store;

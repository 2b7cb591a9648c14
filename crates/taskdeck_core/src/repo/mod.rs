//! Persistence adapter layer.
//!
//! # Responsibility
//! - Define the durable-storage contract for the task collection.
//! - Isolate SQLite and serialization details from service orchestration.
//!
//! # Invariants
//! - Storage holds the full collection as one serialized document;
//!   last write wins, no partial writes.

pub mod collection_repo;

//! Domain model for the task collection.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep identity generation next to the shapes it identifies.
//!
//! # Invariants
//! - Every committed task is identified by a stable `TaskId`.
//! - Draft (uncommitted) tasks are the only shape without identity.

pub mod ident;
pub mod task;

//! Derived read-only views over the task collection.
//!
//! # Responsibility
//! - Narrow (filter) and order (sort) the collection for presentation.
//!
//! # Invariants
//! - View functions are pure: they own no state and never mutate tasks.

pub mod filter;
pub mod sort;

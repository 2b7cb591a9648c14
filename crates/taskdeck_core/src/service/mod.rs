//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate storage, notices and view selections into the APIs the
//!   presentation layer consumes.
//! - Keep UI layers decoupled from persistence details.

pub mod seed;
pub mod session;
pub mod task_store;

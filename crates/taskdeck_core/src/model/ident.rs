//! Task identifier generation.
//!
//! # Responsibility
//! - Produce fresh, collision-resistant task identifiers.
//!
//! # Invariants
//! - No registry scan against the live collection: uniqueness rests on the
//!   UUIDv4 random space, which is ample for a single-user session.

use crate::model::task::TaskId;
use uuid::Uuid;

/// Returns a fresh identifier for a task about to be committed.
pub fn fresh_task_id() -> TaskId {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::fresh_task_id;

    #[test]
    fn consecutive_ids_differ() {
        assert_ne!(fresh_task_id(), fresh_task_id());
    }

    #[test]
    fn ids_are_not_nil() {
        assert!(!fresh_task_id().is_nil());
    }
}

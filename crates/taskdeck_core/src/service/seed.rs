//! Bundled default task collection.
//!
//! # Responsibility
//! - Provide the starter tasks used when durable storage holds no prior
//!   state or cannot be read.

use crate::model::ident;
use crate::model::task::{Priority, Task};

/// Returns the default starter collection.
///
/// IDs are minted fresh on every call; two seeded sessions never share
/// task identities.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::with_id(
            ident::fresh_task_id(),
            "Set up the project repository",
            "Alice",
            Priority::High,
        ),
        Task::with_id(
            ident::fresh_task_id(),
            "Review open pull requests",
            "Bob",
            Priority::Medium,
        ),
        Task::with_id(
            ident::fresh_task_id(),
            "Update the onboarding notes",
            "Carol",
            Priority::Low,
        ),
    ]
}

//! Core domain logic for taskdeck, a local todo-list manager.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod notice;
pub mod repo;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging};
pub use model::task::{Priority, Task, TaskDraft, TaskId, ValidationError};
pub use notice::{Notifier, NOTICE_TTL};
pub use repo::collection_repo::{
    CollectionStore, SqliteCollectionStore, StorageError, StorageResult,
};
pub use service::seed::seed_tasks;
pub use service::session::Session;
pub use service::task_store::TaskStore;
pub use view::filter::{
    available_assignees, available_priorities, filter_tasks, AssigneeFilter, FilterSelection,
    PriorityFilter,
};
pub use view::sort::{sort_tasks, SortColumn, SortDirection, SortSpec};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

//! Presentation session state and view derivation.
//!
//! # Responsibility
//! - Own the application state consumed by the presentation layer: the
//!   task store plus the ephemeral filter and sort selections.
//! - Derive the visible task sequence (filter, recency reversal, sort).
//!
//! # Invariants
//! - Filter and sort selections are session-local and never persisted.
//! - `visible_tasks` never mutates the canonical collection.

use crate::model::task::{Task, TaskDraft, TaskId};
use crate::repo::collection_repo::CollectionStore;
use crate::service::task_store::TaskStore;
use crate::view::filter::{self, AssigneeFilter, FilterSelection, PriorityFilter};
use crate::view::sort::{self, SortSpec};

/// Application state for one presentation session.
pub struct Session<S: CollectionStore> {
    store: TaskStore<S>,
    filters: FilterSelection,
    sort: SortSpec,
}

impl<S: CollectionStore> Session<S> {
    /// Opens the store and starts with unconstrained selections.
    pub fn open(storage: S) -> Self {
        Self {
            store: TaskStore::open(storage),
            filters: FilterSelection::default(),
            sort: SortSpec::default(),
        }
    }

    /// The visible task sequence.
    ///
    /// Filters the canonical collection, reverses it so the most recently
    /// added visible tasks surface first (default presentation order), then
    /// applies the session's sort selection on top.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        let mut visible = filter::filter_tasks(self.store.list(), &self.filters);
        visible.reverse();
        sort::sort_tasks(&mut visible, &self.sort);
        visible
    }

    /// Commits a form submission: a draft with an id edits that task, a
    /// draft without one is added as new.
    ///
    /// Returns the id the draft ended up under, or `None` when an edit
    /// referenced a task that no longer exists.
    pub fn save_task(&mut self, draft: TaskDraft) -> Option<TaskId> {
        match draft.id {
            Some(id) => self.store.update(draft.into_task()).then_some(id),
            None => Some(self.store.add(draft)),
        }
    }

    /// Removes a task by id; `false` when it was already gone.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        self.store.remove(id)
    }

    pub fn set_assignee_filter(&mut self, assignee: AssigneeFilter) {
        self.filters.assignee = assignee;
    }

    pub fn set_priority_filter(&mut self, priority: PriorityFilter) {
        self.filters.priority = priority;
    }

    /// Restores both filter dimensions to the unconstrained sentinel.
    pub fn reset_filters(&mut self) {
        self.filters.reset();
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Selectable assignee values derived from the current collection.
    pub fn available_assignees(&self) -> Vec<String> {
        filter::available_assignees(self.store.list())
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore<S> {
        &mut self.store
    }
}

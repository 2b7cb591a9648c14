//! Filter engine over the task collection.
//!
//! # Responsibility
//! - Derive the visible subset from the full collection and a selection.
//! - Enumerate selectable assignees for filter controls.
//!
//! # Invariants
//! - Filtering preserves the relative order of included tasks.
//! - The "All" sentinel exists only on selection types, never on tasks.

use crate::model::task::{Priority, Task};

/// Display/parse name of the unconstrained sentinel.
pub const ALL: &str = "All";

/// Assignee dimension of a filter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssigneeFilter {
    #[default]
    All,
    Name(String),
}

impl AssigneeFilter {
    /// Parses the sentinel or a literal assignee name.
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Name(value.to_string())
        }
    }

    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Name(name) => task.assignee == *name,
        }
    }
}

/// Priority dimension of a filter selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Parses the sentinel or a priority wire name.
    pub fn parse(value: &str) -> Option<Self> {
        if value == ALL {
            return Some(Self::All);
        }
        Priority::parse(value).map(Self::Only)
    }

    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Only(priority) => task.priority == *priority,
        }
    }
}

/// Ephemeral user-chosen constraints narrowing the visible tasks.
///
/// Owned by the presentation session, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub assignee: AssigneeFilter,
    pub priority: PriorityFilter,
}

impl FilterSelection {
    /// A task is visible iff both dimensions match.
    pub fn matches(&self, task: &Task) -> bool {
        self.assignee.matches(task) && self.priority.matches(task)
    }

    /// Restores the unconstrained defaults for both dimensions.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether both dimensions are at the "All" sentinel.
    ///
    /// Drives the enabled state of a reset control.
    pub fn is_unconstrained(&self) -> bool {
        self.assignee == AssigneeFilter::All && self.priority == PriorityFilter::All
    }
}

/// Derives the visible subset, preserving relative order.
///
/// Pure: the caller layers any presentation ordering (most-recent-first
/// reversal, sorting) on top of the returned sequence.
pub fn filter_tasks<'a>(tasks: &'a [Task], selection: &FilterSelection) -> Vec<&'a Task> {
    tasks.iter().filter(|task| selection.matches(task)).collect()
}

/// Selectable assignee values for filter controls: the sentinel followed by
/// distinct assignees in first-appearance order.
pub fn available_assignees(tasks: &[Task]) -> Vec<String> {
    let mut values = vec![ALL.to_string()];
    for task in tasks {
        if !values[1..].iter().any(|existing| *existing == task.assignee) {
            values.push(task.assignee.clone());
        }
    }
    values
}

/// Selectable priority values for filter controls.
pub fn available_priorities() -> [&'static str; 4] {
    [ALL, "High", "Medium", "Low"]
}

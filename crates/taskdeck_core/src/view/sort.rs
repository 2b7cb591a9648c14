//! Sort engine over the filtered task sequence.
//!
//! # Responsibility
//! - Order a sequence of tasks by a chosen column and direction.
//!
//! # Invariants
//! - Sorting is stable: equal keys keep their relative input order.
//! - Comparison is lexicographic on the column's text value; priority is
//!   compared as text ("High" < "Low" < "Medium"), not severity rank.

use crate::model::task::Task;

/// Sortable columns of the task table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Task,
    Assignee,
    Priority,
}

impl SortColumn {
    /// Parses a column by its lowercase name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "task" => Some(Self::Task),
            "assignee" => Some(Self::Assignee),
            "priority" => Some(Self::Priority),
            _ => None,
        }
    }

    fn key<'a>(&self, task: &'a Task) -> &'a str {
        match self {
            Self::Task => task.task.as_str(),
            Self::Assignee => task.assignee.as_str(),
            Self::Priority => task.priority.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parses a direction by its lowercase name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" | "ascending" => Some(Self::Ascending),
            "desc" | "descending" => Some(Self::Descending),
            _ => None,
        }
    }
}

/// Ephemeral user-chosen ordering; `None` leaves the sequence unchanged.
///
/// Owned by the presentation session, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub order: Option<(SortColumn, SortDirection)>,
}

impl SortSpec {
    pub fn by(column: SortColumn, direction: SortDirection) -> Self {
        Self {
            order: Some((column, direction)),
        }
    }
}

/// Stably orders `tasks` in place according to `spec`.
///
/// Descending reverses the comparator, not the slice, so equal keys still
/// keep their input order.
pub fn sort_tasks(tasks: &mut [&Task], spec: &SortSpec) {
    let Some((column, direction)) = spec.order else {
        return;
    };

    tasks.sort_by(|a, b| {
        let ordering = column.key(a).cmp(column.key(b));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record owned by the store.
//! - Define the draft shape used by form-layer callers before commit.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - A stored task's `priority` is always a concrete level; the "All"
//!   filter sentinel is representable only on filter types, never here.

use crate::model::ident;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a committed task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Priority level of a stored task.
///
/// Serialized with the exact capitalized wire names; text-based comparison
/// (the sort engine) uses the same strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Wire/display name, also the lexicographic sort key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Parses a wire/display name back into a level.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical committed task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable ID assigned at creation, immutable thereafter.
    pub id: TaskId,
    /// Free-text description.
    pub task: String,
    /// Free-text label for the responsible party.
    pub assignee: String,
    pub priority: Priority,
}

impl Task {
    /// Creates a committed task with a caller-provided stable ID.
    ///
    /// Used by seeding and tests where identity is decided up front.
    pub fn with_id(
        id: TaskId,
        task: impl Into<String>,
        assignee: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            task: task.into(),
            assignee: assignee.into(),
            priority,
        }
    }
}

/// Form-layer task shape: identity is optional until the store commits it.
///
/// A draft with `id == None` becomes an `add`; a draft carrying an `id`
/// becomes an `update` of that task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub id: Option<TaskId>,
    pub task: String,
    pub assignee: String,
    pub priority: Priority,
}

impl TaskDraft {
    /// Creates an uncommitted draft without identity.
    pub fn new(
        task: impl Into<String>,
        assignee: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: None,
            task: task.into(),
            assignee: assignee.into(),
            priority,
        }
    }

    /// Presence check for form-layer callers.
    ///
    /// The store itself accepts an empty description as ordinary text; this
    /// check belongs to whoever collects user input.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.task.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(())
    }

    /// Commits this draft into a task record, minting a fresh stable ID
    /// when the draft does not carry one.
    pub fn into_task(self) -> Task {
        Task {
            id: self.id.unwrap_or_else(ident::fresh_task_id),
            task: self.task,
            assignee: self.assignee,
            priority: self.priority,
        }
    }
}

impl From<Task> for TaskDraft {
    fn from(task: Task) -> Self {
        Self {
            id: Some(task.id),
            task: task.task,
            assignee: task.assignee,
            priority: task.priority,
        }
    }
}

/// Form-layer validation failure for a draft task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyDescription,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "task description must not be empty"),
        }
    }
}

impl Error for ValidationError {}

//! Task store: the canonical ordered collection and its mutations.
//!
//! # Responsibility
//! - Own the single source-of-truth task collection in insertion order.
//! - Write every applied mutation through to durable storage.
//! - Surface change notices through the owned notifier.
//!
//! # Invariants
//! - No two tasks share an `id`.
//! - Mutations referencing an absent `id` leave the collection, storage and
//!   notices untouched and report `false`.
//! - Storage failures never roll back the in-memory state; the session
//!   stays authoritative and the failure degrades to a warning notice.

use crate::model::ident;
use crate::model::task::{Task, TaskDraft, TaskId};
use crate::notice::Notifier;
use crate::repo::collection_repo::CollectionStore;
use crate::service::seed::seed_tasks;
use log::{info, warn};

/// Owner of the canonical task collection.
///
/// Generic over the storage backend so tests can swap in in-memory or
/// failing stores.
pub struct TaskStore<S: CollectionStore> {
    tasks: Vec<Task>,
    storage: S,
    notifier: Notifier,
}

impl<S: CollectionStore> TaskStore<S> {
    /// Opens the store from durable storage.
    ///
    /// Falls back to the bundled seed set when storage holds no prior state,
    /// and also when the stored document cannot be read or decoded; the
    /// failure is logged and surfaced as a warning notice rather than
    /// aborting startup. A seeded collection is persisted immediately.
    pub fn open(storage: S) -> Self {
        let mut notifier = Notifier::new();

        let tasks = match storage.load() {
            Ok(Some(tasks)) => {
                info!(
                    "event=store_open module=store status=ok source=storage count={}",
                    tasks.len()
                );
                Some(tasks)
            }
            Ok(None) => {
                info!("event=store_open module=store status=ok source=seed reason=absent");
                None
            }
            Err(err) => {
                warn!(
                    "event=store_open module=store status=warn source=seed error={err}"
                );
                notifier.notify("Stored tasks could not be read; starting from defaults.");
                None
            }
        };

        let mut store = match tasks {
            Some(tasks) => Self {
                tasks,
                storage,
                notifier,
            },
            None => {
                let mut store = Self {
                    tasks: seed_tasks(),
                    storage,
                    notifier,
                };
                store.persist();
                store
            }
        };

        store.dedupe_guard();
        store
    }

    /// Commits a draft as a new task at the end of the collection.
    ///
    /// An empty description is accepted as ordinary text; presence checks
    /// belong to the form layer (`TaskDraft::validate`).
    pub fn add(&mut self, draft: TaskDraft) -> TaskId {
        let task = Task {
            id: ident::fresh_task_id(),
            task: draft.task,
            assignee: draft.assignee,
            priority: draft.priority,
        };
        let id = task.id;
        self.tasks.push(task);
        self.notifier.notify("Task added successfully!");
        self.persist();
        info!("event=task_add module=store status=ok id={id}");
        id
    }

    /// Replaces the stored task whose id matches.
    ///
    /// Returns whether a match was found; an absent id is a silent no-op
    /// apart from the returned flag.
    pub fn update(&mut self, task: Task) -> bool {
        let Some(slot) = self.tasks.iter_mut().find(|stored| stored.id == task.id) else {
            info!("event=task_update module=store status=ok outcome=not_found id={}", task.id);
            return false;
        };

        let id = task.id;
        *slot = task;
        self.notifier.notify("Task edited successfully!");
        self.persist();
        info!("event=task_update module=store status=ok outcome=replaced id={id}");
        true
    }

    /// Removes the task with the matching id.
    ///
    /// Returns whether a match was found; removing an absent id is a no-op,
    /// so a second removal of the same id reports `false`.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            info!("event=task_remove module=store status=ok outcome=not_found id={id}");
            return false;
        }

        self.notifier.notify("Task deleted successfully!");
        self.persist();
        info!("event=task_remove module=store status=ok outcome=removed id={id}");
        true
    }

    /// The full collection in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Change-notice channel observed by the presentation layer.
    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    /// Full re-serialization and write-through after an applied mutation.
    ///
    /// On failure the in-memory state stays authoritative for the session
    /// and the caller-visible mutation outcome is unaffected. Runs after
    /// the mutation's success notice so the warning replaces it: with at
    /// most one visible notice, the save failure must be the one that
    /// surfaces.
    fn persist(&mut self) {
        if let Err(err) = self.storage.save(&self.tasks) {
            warn!("event=collection_save module=store status=warn error={err}");
            self.notifier
                .notify("Tasks could not be saved; changes are kept for this session only.");
        }
    }

    /// Drops later duplicates should storage ever hand back colliding ids.
    fn dedupe_guard(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.tasks.retain(|task| seen.insert(task.id));
    }
}

use std::collections::HashSet;
use taskdeck_core::db::{open_db_in_memory, DbError};
use taskdeck_core::model::ident;
use taskdeck_core::{
    CollectionStore, Priority, SqliteCollectionStore, StorageError, StorageResult, Task,
    TaskDraft, TaskStore,
};

/// Storage double whose writes always fail.
struct UnwritableStore;

impl CollectionStore for UnwritableStore {
    fn load(&self) -> StorageResult<Option<Vec<Task>>> {
        Ok(None)
    }

    fn save(&self, _tasks: &[Task]) -> StorageResult<()> {
        Err(StorageError::Db(DbError::SchemaAhead {
            found: 1,
            supported: 0,
        }))
    }
}

#[test]
fn fresh_store_opens_with_seed_collection() {
    let conn = open_db_in_memory().unwrap();
    let store = TaskStore::open(SqliteCollectionStore::new(&conn));

    assert_eq!(store.list().len(), 3);
    let ids: HashSet<_> = store.list().iter().map(|task| task.id).collect();
    assert_eq!(ids.len(), 3);
}

#[test]
fn add_appends_with_fresh_unique_id() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::open(SqliteCollectionStore::new(&conn));
    let before = store.list().len();

    let id = store.add(TaskDraft::new("Buy milk", "Sam", Priority::Low));

    assert_eq!(store.list().len(), before + 1);
    let last = store.list().last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.assignee, "Sam");
    assert_eq!(last.priority, Priority::Low);

    let ids: HashSet<_> = store.list().iter().map(|task| task.id).collect();
    assert_eq!(ids.len(), store.list().len());
}

#[test]
fn add_accepts_empty_description_as_ordinary_text() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::open(SqliteCollectionStore::new(&conn));

    let id = store.add(TaskDraft::new("", "Sam", Priority::Medium));

    let stored = store.list().iter().find(|task| task.id == id).unwrap();
    assert_eq!(stored.task, "");
}

#[test]
fn draft_validation_rejects_empty_description() {
    let draft = TaskDraft::new("  ", "Sam", Priority::Low);
    assert!(draft.validate().is_err());

    let draft = TaskDraft::new("Water plants", "Sam", Priority::Low);
    assert!(draft.validate().is_ok());
}

#[test]
fn update_replaces_matching_task() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::open(SqliteCollectionStore::new(&conn));
    let id = store.add(TaskDraft::new("Draft wording", "Sam", Priority::Low));

    let replaced = store.update(Task::with_id(id, "Final wording", "Alex", Priority::High));

    assert!(replaced);
    let stored = store.list().iter().find(|task| task.id == id).unwrap();
    assert_eq!(stored.task, "Final wording");
    assert_eq!(stored.assignee, "Alex");
    assert_eq!(stored.priority, Priority::High);
}

#[test]
fn update_on_absent_id_leaves_collection_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::open(SqliteCollectionStore::new(&conn));
    let snapshot = store.list().to_vec();

    let replaced = store.update(Task::with_id(
        ident::fresh_task_id(),
        "Ghost",
        "Nobody",
        Priority::High,
    ));

    assert!(!replaced);
    assert_eq!(store.list(), snapshot.as_slice());
}

#[test]
fn remove_on_absent_id_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::open(SqliteCollectionStore::new(&conn));
    let snapshot = store.list().to_vec();

    assert!(!store.remove(ident::fresh_task_id()));
    assert_eq!(store.list(), snapshot.as_slice());
}

#[test]
fn remove_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::open(SqliteCollectionStore::new(&conn));
    let id = store.add(TaskDraft::new("Short lived", "Sam", Priority::Low));
    let after_add = store.list().len();

    assert!(store.remove(id));
    assert_eq!(store.list().len(), after_add - 1);

    assert!(!store.remove(id));
    assert_eq!(store.list().len(), after_add - 1);
}

#[test]
fn mutations_write_through_to_storage() {
    let conn = open_db_in_memory().unwrap();

    let added_id = {
        let mut store = TaskStore::open(SqliteCollectionStore::new(&conn));
        store.add(TaskDraft::new("Persisted", "Sam", Priority::Medium))
    };

    let reopened = TaskStore::open(SqliteCollectionStore::new(&conn));
    assert_eq!(reopened.list().len(), 4);
    let last = reopened.list().last().unwrap();
    assert_eq!(last.id, added_id);
    assert_eq!(last.task, "Persisted");
}

#[test]
fn mutations_post_change_notices() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::open(SqliteCollectionStore::new(&conn));

    let id = store.add(TaskDraft::new("Notice me", "Sam", Priority::Low));
    assert_eq!(
        store.notifier_mut().current(),
        Some("Task added successfully!")
    );

    store.update(Task::with_id(id, "Noticed", "Sam", Priority::Low));
    assert_eq!(
        store.notifier_mut().current(),
        Some("Task edited successfully!")
    );

    store.remove(id);
    assert_eq!(
        store.notifier_mut().current(),
        Some("Task deleted successfully!")
    );
}

#[test]
fn save_failure_keeps_memory_authoritative_and_surfaces_warning() {
    let mut store = TaskStore::open(UnwritableStore);
    store.notifier_mut().clear();

    let id = store.add(TaskDraft::new("Buy milk", "Sam", Priority::Low));
    assert_eq!(store.list().len(), 4);
    assert_eq!(store.list().last().unwrap().id, id);
    // The warning wins over the success notice: only one is visible.
    let notice = store.notifier_mut().current().unwrap();
    assert!(notice.contains("could not be saved"));

    assert!(store.update(Task::with_id(id, "Buy oat milk", "Sam", Priority::Low)));
    assert_eq!(store.list().last().unwrap().task, "Buy oat milk");
    let notice = store.notifier_mut().current().unwrap();
    assert!(notice.contains("could not be saved"));

    assert!(store.remove(id));
    assert_eq!(store.list().len(), 3);
    let notice = store.notifier_mut().current().unwrap();
    assert!(notice.contains("could not be saved"));
}

#[test]
fn no_op_mutations_post_no_notice() {
    let conn = open_db_in_memory().unwrap();
    let mut store = TaskStore::open(SqliteCollectionStore::new(&conn));
    store.notifier_mut().clear();

    store.remove(ident::fresh_task_id());
    store.update(Task::with_id(
        ident::fresh_task_id(),
        "Ghost",
        "Nobody",
        Priority::Low,
    ));

    assert_eq!(store.notifier_mut().current(), None);
}

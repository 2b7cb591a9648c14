use taskdeck_core::db::{open_db, open_db_in_memory};
use taskdeck_core::model::ident;
use taskdeck_core::{
    CollectionStore, Priority, SqliteCollectionStore, StorageError, Task, TaskStore,
};

fn sample_collection() -> Vec<Task> {
    vec![
        Task::with_id(ident::fresh_task_id(), "Write report", "Alice", Priority::High),
        Task::with_id(ident::fresh_task_id(), "File expenses", "Bob", Priority::Low),
        Task::with_id(ident::fresh_task_id(), "Plan offsite", "Alice", Priority::Medium),
    ]
}

fn put_raw_body(conn: &rusqlite::Connection, body: &str) {
    conn.execute(
        "INSERT INTO slots (slot, body) VALUES ('tasks', ?1)
         ON CONFLICT(slot) DO UPDATE SET body = excluded.body;",
        [body],
    )
    .unwrap();
}

#[test]
fn save_then_load_preserves_order_and_fields() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::new(&conn);
    let tasks = sample_collection();

    store.save(&tasks).unwrap();
    let loaded = store.load().unwrap().unwrap();

    assert_eq!(loaded, tasks);
}

#[test]
fn load_returns_absent_when_slot_is_missing() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::new(&conn);

    assert!(store.load().unwrap().is_none());
}

#[test]
fn load_treats_trivially_short_body_as_absent() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::new(&conn);

    put_raw_body(&conn, "[]");
    assert!(store.load().unwrap().is_none());

    put_raw_body(&conn, "");
    assert!(store.load().unwrap().is_none());
}

#[test]
fn load_reports_malformed_body_as_codec_error() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::new(&conn);

    put_raw_body(&conn, "{not valid json at all");

    let err = store.load().unwrap_err();
    assert!(matches!(err, StorageError::Codec(_)));
}

#[test]
fn save_overwrites_prior_content() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::new(&conn);

    store.save(&sample_collection()).unwrap();
    let smaller = vec![Task::with_id(
        ident::fresh_task_id(),
        "Only survivor",
        "Carol",
        Priority::Low,
    )];
    store.save(&smaller).unwrap();

    assert_eq!(store.load().unwrap().unwrap(), smaller);
}

#[test]
fn store_open_falls_back_to_seed_on_malformed_storage() {
    let conn = open_db_in_memory().unwrap();
    put_raw_body(&conn, "{not valid json at all");

    let mut store = TaskStore::open(SqliteCollectionStore::new(&conn));

    assert_eq!(store.list().len(), 3);
    let notice = store.notifier_mut().current().unwrap();
    assert!(notice.contains("could not be read"));
}

#[test]
fn file_backed_round_trip_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("taskdeck.db3");
    let tasks = sample_collection();

    {
        let conn = open_db(&db_path).unwrap();
        SqliteCollectionStore::new(&conn).save(&tasks).unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let loaded = SqliteCollectionStore::new(&conn).load().unwrap().unwrap();
    assert_eq!(loaded, tasks);
}

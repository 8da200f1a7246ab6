// Integration tests: store -> slots -> store through SQLite

use tutoria_core::ops::{session_ops, system_ops};
use tutoria_core::queries;
use tutoria_core::{SessionStatus, Store};
use tutoria_store::{hydrate, persist_dirty, SqliteSlotStorage};

const MARIA: &str = "maria.gonzalez@live.uleam.edu.ec";

fn seeded() -> Store {
    let mut store = Store::new();
    system_ops::ensure_default_data(&mut store);
    store
}

#[test]
fn test_seeded_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.db");

    let mut store = seeded();
    {
        let mut storage = SqliteSlotStorage::open(&path).unwrap();
        assert_eq!(persist_dirty(&mut storage, &mut store).unwrap(), 6);
    }

    let storage = SqliteSlotStorage::open(&path).unwrap();
    let loaded = hydrate(&storage).unwrap();

    assert_eq!(loaded.users(), store.users());
    assert_eq!(loaded.sessions(), store.sessions());
    assert_eq!(loaded.topics(), store.topics());
    assert_eq!(loaded.files(), store.files());
    assert_eq!(loaded.assignments(), store.assignments());
    assert_eq!(loaded.notifications(), store.notifications());
    assert_eq!(loaded.dirty_slots().count(), 0);
}

#[test]
fn test_incremental_write_back() {
    let mut storage = SqliteSlotStorage::in_memory().unwrap();
    let mut store = seeded();
    assert_eq!(persist_dirty(&mut storage, &mut store).unwrap(), 6);

    let accepted = queries::entity_queries::sessions_by_student(&store, MARIA)
        .into_iter()
        .find(|s| s.status == SessionStatus::Accepted)
        .map(|s| s.id.clone())
        .unwrap();
    session_ops::complete_session(&mut store, &accepted, "Muy bueno", None).unwrap();

    // sessions plus the student's notification
    assert_eq!(persist_dirty(&mut storage, &mut store).unwrap(), 2);

    let loaded = hydrate(&storage).unwrap();
    let session = queries::entity_queries::get_session(&loaded, &accepted).unwrap();
    assert_eq!(session.status, SessionStatus::Completed);
    assert_eq!(session.grade.as_deref(), Some("Muy bueno"));
}

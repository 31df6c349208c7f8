//! File-backed store tests: durability across reopen, schema idempotence,
//! and compatibility with databases written by older versions of the app.

use notedeskapp::model::NoteDraft;
use notedeskapp::store::NoteStore;
use tempfile::TempDir;

#[test]
fn records_survive_a_reopen() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("notepad.db");

    {
        let store = NoteStore::open(&db).unwrap();
        store.create(&NoteDraft::new("Groceries", "milk, eggs")).unwrap();
        store
            .create(
                &NoteDraft::new("Diary", "secret entry")
                    .with_password("1234")
                    .hidden(true),
            )
            .unwrap();
    }

    // Reopening reapplies the schema; that must be harmless.
    let store = NoteStore::open(&db).unwrap();
    let visible = store.list_visible().unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Groceries");
    assert_eq!(
        store.find_by_password("1234").unwrap().unwrap().content,
        "secret entry"
    );
}

#[test]
fn open_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("nested").join("deeper").join("notepad.db");

    let store = NoteStore::open(&db).unwrap();
    store.create(&NoteDraft::new("Here", "")).unwrap();
    assert!(db.exists());
}

#[test]
fn updates_are_durable() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("notepad.db");

    let id = {
        let store = NoteStore::open(&db).unwrap();
        let id = store.create(&NoteDraft::new("Diary", "old entry")).unwrap();
        store.update(id, "Diary", "updated entry").unwrap();
        id
    };

    let store = NoteStore::open(&db).unwrap();
    let note = store.get(id).unwrap().unwrap();
    assert_eq!(note.content, "updated entry");
}

#[test]
fn deletes_are_durable() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("notepad.db");

    let id = {
        let store = NoteStore::open(&db).unwrap();
        let id = store.create(&NoteDraft::new("Doomed", "")).unwrap();
        store.delete(id).unwrap();
        id
    };

    let store = NoteStore::open(&db).unwrap();
    assert!(store.get(id).unwrap().is_none());
}

/// Databases written by the original desktop app store `''` (not NULL) for
/// unprotected notes. Those rows must list as visible and read back with
/// `password == None`.
#[test]
fn legacy_empty_string_password_reads_as_unprotected() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("notepad.db");

    {
        let conn = rusqlite::Connection::open(&db).unwrap();
        conn.execute(
            "CREATE TABLE IF NOT EXISTS notepad (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                password TEXT,
                hidden INTEGER DEFAULT 0
            )",
            [],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO notepad (title, content, password, hidden) VALUES ('Old', 'body', '', 0)",
            [],
        )
        .unwrap();
    }

    let store = NoteStore::open(&db).unwrap();
    let visible = store.list_visible().unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Old");
    assert_eq!(visible[0].password, None);
}

//! # Note Store
//!
//! Sole owner of persisted note data; all access goes through [`NoteStore`].
//!
//! ## Storage model
//!
//! One SQLite table, `notepad`, identical to the schema used by earlier
//! versions of the app so existing `notepad.db` files open unchanged:
//!
//! ```text
//! id       INTEGER PRIMARY KEY AUTOINCREMENT
//! title    TEXT NOT NULL
//! content  TEXT NOT NULL
//! password TEXT              -- NULL or '' both mean "unprotected"
//! hidden   INTEGER DEFAULT 0
//! ```
//!
//! Every operation is a single synchronous statement with an implicit
//! transaction; there is no batching and no statement spans two user actions.
//!
//! ## Failure semantics
//!
//! Only [`NoteStore::create`] validates input. `update` and `delete` on a
//! missing id are benign no-ops, matching the best-effort persistence model.
//! SQLite failures surface as [`NotedeskError::Storage`].
//!
//! ## Testing
//!
//! SQLite supplies the in-memory test backend itself:
//! [`NoteStore::open_in_memory`] runs the exact production code paths with no
//! filesystem. There is no storage trait for that reason.

use crate::error::{NotedeskError, Result};
use crate::model::{normalize_password, Note, NoteDraft, NoteId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::fs;
use std::path::Path;
use tracing::debug;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS notepad (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    password TEXT,
    hidden INTEGER DEFAULT 0
)";

pub struct NoteStore {
    conn: Connection,
}

impl NoteStore {
    /// Opens (creating if needed) the database at `path` and applies the
    /// schema. Parent directories are created; reapplying the schema to an
    /// existing file is harmless.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened note database");
        Self::from_connection(conn)
    }

    /// In-memory store for tests; same schema, same code paths.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    /// Inserts a new record and returns its assigned id.
    ///
    /// The title is trimmed before storage; a title that is empty after
    /// trimming fails with [`NotedeskError::EmptyTitle`] and writes nothing.
    pub fn create(&self, draft: &NoteDraft) -> Result<NoteId> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(NotedeskError::EmptyTitle);
        }
        let password = normalize_password(draft.password.clone());
        self.conn.execute(
            "INSERT INTO notepad (title, content, password, hidden) VALUES (?1, ?2, ?3, ?4)",
            params![title, draft.content, password, draft.hidden as i64],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetches one record by id. `None` when the id does not exist.
    pub fn get(&self, id: NoteId) -> Result<Option<Note>> {
        let note = self
            .conn
            .query_row(
                "SELECT id, title, content, password, hidden FROM notepad WHERE id = ?1",
                params![id],
                row_to_note,
            )
            .optional()?;
        Ok(note)
    }

    /// Records that are neither hidden nor password-protected, in insertion
    /// order.
    pub fn list_visible(&self) -> Result<Vec<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, content, password, hidden FROM notepad
             WHERE hidden = 0 AND (password IS NULL OR password = '')
             ORDER BY id",
        )?;
        let notes = stmt
            .query_map([], row_to_note)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(notes)
    }

    /// First hidden record whose password exactly equals `password` (plain
    /// text comparison, preserved from the original app). The empty string
    /// never matches: empty means "unprotected", so it short-circuits before
    /// the query. With several hidden records sharing a password, which one
    /// surfaces is undefined.
    pub fn find_by_password(&self, password: &str) -> Result<Option<Note>> {
        if password.is_empty() {
            return Ok(None);
        }
        let note = self
            .conn
            .query_row(
                "SELECT id, title, content, password, hidden FROM notepad
                 WHERE password = ?1 AND hidden = 1",
                params![password],
                row_to_note,
            )
            .optional()?;
        Ok(note)
    }

    /// Overwrites title and content for `id`. Silent no-op when the id does
    /// not exist; password and hidden flag are not editable after creation.
    pub fn update(&self, id: NoteId, title: &str, content: &str) -> Result<()> {
        self.conn.execute(
            "UPDATE notepad SET title = ?1, content = ?2 WHERE id = ?3",
            params![title, content, id],
        )?;
        Ok(())
    }

    /// Removes the record. No-op when the id does not exist.
    pub fn delete(&self, id: NoteId) -> Result<()> {
        self.conn
            .execute("DELETE FROM notepad WHERE id = ?1", params![id])?;
        Ok(())
    }
}

fn row_to_note(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        password: normalize_password(row.get(3)?),
        hidden: row.get::<_, i64>(4)? != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> NoteStore {
        NoteStore::open_in_memory().unwrap()
    }

    #[test]
    fn create_then_get_roundtrips_all_fields() {
        let store = store();
        let id = store
            .create(
                &NoteDraft::new("Diary", "secret entry")
                    .with_password("1234")
                    .hidden(true),
            )
            .unwrap();

        let note = store.get(id).unwrap().unwrap();
        assert_eq!(note.id, id);
        assert_eq!(note.title, "Diary");
        assert_eq!(note.content, "secret entry");
        assert_eq!(note.password, Some("1234".to_string()));
        assert!(note.hidden);
    }

    #[test]
    fn create_trims_title() {
        let store = store();
        let id = store.create(&NoteDraft::new("  Groceries  ", "")).unwrap();
        assert_eq!(store.get(id).unwrap().unwrap().title, "Groceries");
    }

    #[test]
    fn create_rejects_empty_title() {
        let store = store();
        for title in ["", "   ", "\t\n"] {
            let err = store.create(&NoteDraft::new(title, "body")).unwrap_err();
            assert!(matches!(err, NotedeskError::EmptyTitle));
        }
        assert!(store.list_visible().unwrap().is_empty());
    }

    #[test]
    fn list_visible_excludes_hidden_and_protected() {
        let store = store();
        store.create(&NoteDraft::new("Plain", "a")).unwrap();
        store
            .create(&NoteDraft::new("Hidden", "b").hidden(true))
            .unwrap();
        store
            .create(&NoteDraft::new("Locked", "c").with_password("pw"))
            .unwrap();

        let visible = store.list_visible().unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Plain");
        assert!(visible.iter().all(|n| !n.hidden && n.password.is_none()));
    }

    #[test]
    fn list_visible_preserves_insertion_order() {
        let store = store();
        for title in ["First", "Second", "Third"] {
            store.create(&NoteDraft::new(title, "")).unwrap();
        }
        let titles: Vec<_> = store
            .list_visible()
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn find_by_password_needs_hidden_and_exact_match() {
        let store = store();
        let id = store
            .create(&NoteDraft::new("Diary", "x").with_password("1234").hidden(true))
            .unwrap();
        // Protected but not hidden: unreachable by the reveal flow.
        store
            .create(&NoteDraft::new("Locked", "y").with_password("1234"))
            .unwrap();

        let found = store.find_by_password("1234").unwrap().unwrap();
        assert_eq!(found.id, id);
        assert!(store.find_by_password("wrong").unwrap().is_none());
    }

    #[test]
    fn find_by_empty_password_never_matches() {
        let store = store();
        store
            .create(&NoteDraft::new("Hidden", "z").hidden(true))
            .unwrap();
        assert!(store.find_by_password("").unwrap().is_none());
    }

    #[test]
    fn update_roundtrips() {
        let store = store();
        let id = store.create(&NoteDraft::new("Diary", "old entry")).unwrap();
        store.update(id, "Diary", "updated entry").unwrap();

        let note = store.get(id).unwrap().unwrap();
        assert_eq!(note.title, "Diary");
        assert_eq!(note.content, "updated entry");
    }

    #[test]
    fn update_missing_id_is_a_noop() {
        let store = store();
        store.update(999, "Ghost", "nothing").unwrap();
        assert!(store.get(999).unwrap().is_none());
        assert!(store.list_visible().unwrap().is_empty());
    }

    #[test]
    fn delete_removes_and_tolerates_missing_id() {
        let store = store();
        let id = store.create(&NoteDraft::new("Gone", "")).unwrap();
        store.delete(id).unwrap();
        assert!(store.get(id).unwrap().is_none());
        // Second delete of the same id is fine.
        store.delete(id).unwrap();
    }
}

//! # Session Facade
//!
//! [`Session`] is the single entry point for all notedesk operations,
//! regardless of the front-end driving it. It is the explicit context object
//! the design calls for: it owns the store handle and the tab strip, so
//! nothing in the crate is ambient or `static`.
//!
//! ## Role and responsibilities
//!
//! - **Dispatches** to the appropriate command function
//! - **Owns** the [`NoteStore`] connection and the [`TabStrip`]
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the session does NOT do
//!
//! - **Business logic**: that belongs in `commands/*`
//! - **Presentation**: returns data structures, not strings
//! - **Prompting**: the delete confirmation is injected by the caller
//!
//! Everything here runs to completion on the single control thread; each
//! call is one complete unit of work before control returns to the caller's
//! event loop.

use crate::commands::{self, CmdResult, ConfirmPrompt};
use crate::error::{NotedeskError, Result};
use crate::model::NoteDraft;
use crate::store::NoteStore;
use crate::tabs::{Tab, TabId, TabStrip};

pub struct Session {
    store: NoteStore,
    tabs: TabStrip,
}

impl Session {
    pub fn new(store: NoteStore) -> Self {
        Self {
            store,
            tabs: TabStrip::new(),
        }
    }

    /// Load-at-startup: one tab per visible note, insertion order.
    pub fn open_visible(&mut self) -> Result<CmdResult> {
        commands::load::run(&self.store, &mut self.tabs)
    }

    pub fn create_note(&mut self, draft: NoteDraft) -> Result<CmdResult> {
        commands::create::run(&self.store, &mut self.tabs, draft)
    }

    pub fn reveal_hidden(&mut self, password: &str) -> Result<CmdResult> {
        commands::reveal::run(&self.store, &mut self.tabs, password)
    }

    pub fn save_active(&mut self, title: &str, content: &str) -> Result<CmdResult> {
        commands::save::run(&self.store, &mut self.tabs, title, content)
    }

    pub fn delete_active(&mut self, confirm: &mut impl ConfirmPrompt) -> Result<CmdResult> {
        commands::delete::run(&self.store, &mut self.tabs, confirm)
    }

    /// Open tabs, in strip order.
    pub fn tabs(&self) -> &[Tab] {
        self.tabs.tabs()
    }

    pub fn selected_tab(&self) -> Option<&Tab> {
        self.tabs.selected()
    }

    /// Selects the tab; false when the id is not open.
    pub fn select_tab(&mut self, id: TabId) -> bool {
        self.tabs.select(id)
    }

    /// Replaces the active tab's buffer. UI state only; persistence happens
    /// on save.
    pub fn edit_active_buffer(&mut self, buffer: String) -> Result<()> {
        let tab = self
            .tabs
            .selected_mut()
            .ok_or(NotedeskError::NoSelection)?;
        tab.buffer = buffer;
        Ok(())
    }

    /// Direct store access for read-side front-end needs.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(NoteStore::open_in_memory().unwrap())
    }

    #[test]
    fn edit_active_buffer_touches_only_ui_state() {
        let mut session = session();
        session
            .create_note(NoteDraft::new("Groceries", "milk"))
            .unwrap();
        let note_id = session.selected_tab().unwrap().note_id.unwrap();

        session.edit_active_buffer("milk, eggs".into()).unwrap();

        assert_eq!(session.selected_tab().unwrap().buffer, "milk, eggs");
        // Not persisted until save.
        let stored = session.store().get(note_id).unwrap().unwrap();
        assert_eq!(stored.content, "milk");

        session.save_active("Groceries", "milk, eggs").unwrap();
        let stored = session.store().get(note_id).unwrap().unwrap();
        assert_eq!(stored.content, "milk, eggs");
    }

    #[test]
    fn edit_with_no_selection_fails() {
        let mut session = session();
        let err = session.edit_active_buffer("x".into()).unwrap_err();
        assert!(matches!(err, NotedeskError::NoSelection));
    }

    #[test]
    fn select_tab_switches_the_active_note() {
        let mut session = session();
        session.create_note(NoteDraft::new("A", "")).unwrap();
        let first = session.tabs()[0].id;
        session.create_note(NoteDraft::new("B", "")).unwrap();

        assert_eq!(session.selected_tab().unwrap().title, "B");
        assert!(session.select_tab(first));
        assert_eq!(session.selected_tab().unwrap().title, "A");
    }
}

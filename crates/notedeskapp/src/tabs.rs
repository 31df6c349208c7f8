//! # Tab Registry State
//!
//! In-memory, ephemeral state: which tabs are open, which one is selected,
//! and which stored record each tab displays.
//!
//! ## Typed tabs instead of widget search
//!
//! Each [`Tab`] carries its record binding and editable buffer directly.
//! There is no runtime search for "the text widget inside the current tab";
//! the strip *is* the authoritative mapping.
//!
//! ## Lifecycle
//!
//! `Unopened → Open → Closed` (terminal). A tab opens only through the three
//! sanctioned flows (load-at-startup, immediately-visible creation,
//! successful hidden-note unlock) and closes only through the delete flow or
//! process exit. `open`/`close` are crate-private so those flows are the only
//! entry points.
//!
//! An open tab normally has `note_id = Some(..)`. An unbound tab is an
//! invariant breach: constructible only through the `test_utils` fixture,
//! handled defensively by the save and delete flows.

use crate::model::NoteId;
use std::fmt;

/// Opaque identifier for an open tab, minted by the strip. Never reused
/// within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab#{}", self.0)
    }
}

/// One open tab: its record binding, display title, and the text the user is
/// editing. The buffer is UI state; it reaches the store only on save.
#[derive(Debug, Clone)]
pub struct Tab {
    pub id: TabId,
    pub note_id: Option<NoteId>,
    pub title: String,
    pub buffer: String,
}

/// The ordered set of open tabs plus the selection.
#[derive(Debug, Default)]
pub struct TabStrip {
    tabs: Vec<Tab>,
    selected: Option<TabId>,
    next_id: u64,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a tab bound to `note_id` and selects it.
    pub(crate) fn open(&mut self, note_id: NoteId, title: String, buffer: String) -> TabId {
        self.push(Some(note_id), title, buffer)
    }

    /// Test fixture: an open tab with no record binding, for exercising the
    /// defensive paths. Not reachable in production flows.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn open_unbound(&mut self, title: String, buffer: String) -> TabId {
        self.push(None, title, buffer)
    }

    fn push(&mut self, note_id: Option<NoteId>, title: String, buffer: String) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;
        self.tabs.push(Tab {
            id,
            note_id,
            title,
            buffer,
        });
        self.selected = Some(id);
        id
    }

    /// Removes the tab. Closing the selected tab leaves nothing selected;
    /// the user picks the next tab explicitly.
    pub(crate) fn close(&mut self, id: TabId) {
        self.tabs.retain(|t| t.id != id);
        if self.selected == Some(id) {
            self.selected = None;
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn selected_id(&self) -> Option<TabId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Tab> {
        self.selected.and_then(|id| self.get(id))
    }

    pub(crate) fn selected_mut(&mut self) -> Option<&mut Tab> {
        match self.selected {
            Some(id) => self.get_mut(id),
            None => None,
        }
    }

    /// Selects the tab; returns false (selection unchanged) when the id is
    /// not open.
    pub fn select(&mut self, id: TabId) -> bool {
        if self.get(id).is_some() {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }
}

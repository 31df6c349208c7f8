//! # Domain Model: Notes and Drafts
//!
//! This module defines the persisted note record ([`Note`]), the creation
//! input ([`NoteDraft`]), and the normalization rules applied before anything
//! reaches the store.
//!
//! ## Normalization
//!
//! - **Title**: trimmed on create; a title that is empty after trimming is
//!   rejected by the store ([`crate::error::NotedeskError::EmptyTitle`]).
//! - **Password**: trimmed; empty-after-trim means "not protected" and is
//!   stored as `NULL`. Databases written by older versions store `''` for
//!   unprotected notes — both spellings read back as `None`.
//!
//! ## Visibility
//!
//! A note appears in the default listing only when it is not hidden AND not
//! password-protected. A hidden note is reachable solely through an exact
//! password match ([`crate::store::NoteStore::find_by_password`]). A
//! protected-but-not-hidden note is excluded from the listing and is not
//! reachable by the reveal flow either; that quirk is preserved deliberately.

/// Row id assigned by SQLite on insert. Unique and immutable for the life of
/// the record.
pub type NoteId = i64;

/// One persisted note, as read from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// `None` means "not password-protected".
    pub password: Option<String>,
    pub hidden: bool,
}

impl Note {
    /// True when the note shows up in the default listing.
    pub fn is_visible(&self) -> bool {
        !self.hidden && self.password.is_none()
    }
}

/// Input to the create flow. Carries everything but the id, which the store
/// assigns.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub password: Option<String>,
    pub hidden: bool,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = normalize_password(Some(password.into()));
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// Collapses the two spellings of "no password" (`None` and empty/whitespace
/// text) into `None`. Applied on every write and every read.
pub fn normalize_password(password: Option<String>) -> Option<String> {
    match password {
        Some(p) => {
            let trimmed = p.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => None,
    }
}

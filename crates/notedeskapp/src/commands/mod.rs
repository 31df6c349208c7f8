//! # Command Layer
//!
//! The core business logic of notedesk. Each user-facing operation lives in
//! its own submodule as a pure function over `(&NoteStore, &mut TabStrip)`.
//!
//! ## What commands do
//!
//! - Implement the actual logic for one operation
//! - Operate on [`Note`](crate::model::Note), [`Tab`](crate::tabs::Tab), and
//!   the other domain types
//! - Return a structured [`CmdResult`] with affected tabs and messages
//! - Stay completely UI-agnostic
//!
//! ## What commands do NOT do
//!
//! - **Any I/O besides the store**: no stdout, stderr, or terminal concerns
//! - **Prompting**: the one mid-operation collaborator, the delete
//!   confirmation, is injected as a [`ConfirmPrompt`]
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Structured returns
//!
//! Commands return [`CmdResult`], not strings. The front-end decides how to
//! render the opened/closed tab ids and the leveled messages.
//!
//! ## Testing strategy
//!
//! This is where the lion's share of testing lives. Command tests use
//! [`NoteStore::open_in_memory`](crate::store::NoteStore::open_in_memory) and
//! verify both the store contents and the tab strip after each operation.
//!
//! ## Command modules
//!
//! - [`load`]: open all visible notes at startup
//! - [`create`]: add-note flow
//! - [`reveal`]: show-hidden flow
//! - [`save`]: save-active flow
//! - [`delete`]: delete-active flow, confirmation-gated

use crate::tabs::TabId;

pub mod create;
pub mod delete;
pub mod load;
pub mod reveal;
pub mod save;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured outcome of one command, for the front-end to render.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Tabs this command opened, in opening order.
    pub opened_tabs: Vec<TabId>,
    /// The tab this command closed, if any.
    pub closed_tab: Option<TabId>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

/// The yes/no collaborator consulted before a delete. The core does not
/// proceed on `false`.
///
/// Blanket-implemented for closures so tests read naturally:
/// `delete::run(&store, &mut tabs, &mut |_: &str| true)`.
pub trait ConfirmPrompt {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> ConfirmPrompt for F {
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

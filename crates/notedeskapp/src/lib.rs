//! # Notedeskapp: Core Library
//!
//! UI-agnostic core of notedesk, a tabbed note keeper. Users create, view,
//! edit, delete, and optionally password-obscure short text notes; notes
//! persist in a local SQLite database and are presented as tabs for the
//! session. The heart of the crate is the **note persistence and
//! tab-synchronization model**: the rules by which the open tabs stay
//! consistent with the stored records, including the visibility and
//! password-gating logic.
//!
//! ## Layering
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  Front-end (crates/notedesk)                               │
//! │  - argument parsing, prompts, rendering                    │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Session facade (session.rs)                               │
//! │  - owns the store handle and the tab strip                 │
//! │  - dispatches to command modules                           │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command layer (commands/*)                                │
//! │  - pure logic over (&NoteStore, &mut TabStrip)             │
//! │  - returns structured CmdResult values                     │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Note store (store.rs)                                     │
//! │  - one SQLite table, one statement per operation           │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything runs on a single control thread. Each operation is a complete,
//! synchronous unit of work: one user action in, one committed store call and
//! one structured result out. Nothing is shared across threads, nothing
//! retries, and no operation leaves partial writes.
//!
//! ## Modules
//!
//! - [`model`]: note records, drafts, normalization rules
//! - [`store`]: SQLite persistence
//! - [`tabs`]: the tab registry state
//! - [`session`]: the context object front-ends talk to
//! - [`commands`]: one module per user-facing operation
//! - [`config`]: optional `config.json`
//! - [`editor`]: `$EDITOR` integration for buffer editing
//! - [`error`]: the error taxonomy

pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod tabs;

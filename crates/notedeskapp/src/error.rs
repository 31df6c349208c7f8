use crate::tabs::TabId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotedeskError {
    /// Create was called with a title that is empty after trimming.
    #[error("Title cannot be empty")]
    EmptyTitle,

    /// The reveal flow found no hidden note with the given password.
    #[error("Incorrect password or no hidden note found with this password")]
    NoHiddenMatch,

    /// Save/delete/edit was invoked while no tab is selected.
    #[error("No note selected")]
    NoSelection,

    /// The selected tab has no backing record id. Indicates a prior
    /// invariant breach; recoverable, but worth logging.
    #[error("Tab {0} is not linked to a stored note")]
    UnboundTab(TabId),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Editor error: {0}")]
    Editor(String),
}

pub type Result<T> = std::result::Result<T, NotedeskError>;

//! # Configuration
//!
//! Notedesk reads an optional `config.json` from the OS-appropriate config
//! directory (via the `directories` crate). A missing file means defaults;
//! a malformed file is a real error, surfaced rather than silently ignored.
//!
//! ## Available settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `db_path` | `<data dir>/notepad.db` | Where the note database lives |
//! | `editor` | `$EDITOR` / `$VISUAL` | Editor command for the `edit` command |
//!
//! Launch flags outrank the config file (`--db` wins over `db_path`).

use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";
pub const DB_FILE: &str = "notepad.db";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct NotedeskConfig {
    /// Overrides the default database location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// Overrides `$EDITOR`/`$VISUAL` for the `edit` command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

impl NotedeskConfig {
    /// Loads the config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Loads from the OS config directory, or defaults when the platform
    /// offers no home directory.
    pub fn load_default() -> Result<Self> {
        match project_dirs() {
            Some(dirs) => Self::load(&dirs.config_dir().join(CONFIG_FILE)),
            None => Ok(Self::default()),
        }
    }

    /// The database path after applying the override chain:
    /// explicit flag, then config file, then `<data dir>/notepad.db`.
    pub fn resolve_db_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.db_path.clone())
            .unwrap_or_else(default_db_path)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "notedesk")
}

fn default_db_path() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.data_dir().join(DB_FILE),
        // Headless fallback, mostly for stripped-down containers.
        None => PathBuf::from(DB_FILE),
    }
}

//! External editor integration for the `edit` command.
//!
//! The active tab's buffer is written to a temp file, the user's editor runs
//! on it, and the file is read back as the new buffer. Persistence still only
//! happens on save.

use crate::error::{NotedeskError, Result};
use std::env;
use std::fs;
use std::process::Command;

/// The editor command: explicit override, then `$EDITOR`, then `$VISUAL`,
/// then common fallbacks.
pub fn get_editor(configured: Option<&str>) -> Result<String> {
    if let Some(editor) = configured {
        if !editor.is_empty() {
            return Ok(editor.to_string());
        }
    }

    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(NotedeskError::Editor(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Runs the editor on `initial` and returns the edited text.
pub fn edit_buffer(editor: &str, initial: &str) -> Result<String> {
    let file = tempfile_path()?;
    fs::write(&file, initial)?;

    // Honor "EDITOR=code --wait" style values.
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| NotedeskError::Editor("Empty editor command".to_string()))?;
    let status = Command::new(program)
        .args(parts)
        .arg(&file)
        .status()
        .map_err(|e| NotedeskError::Editor(format!("Failed to launch '{}': {}", editor, e)))?;

    if !status.success() {
        let _ = fs::remove_file(&file);
        return Err(NotedeskError::Editor(format!(
            "Editor '{}' exited with {}",
            editor, status
        )));
    }

    let edited = fs::read_to_string(&file)?;
    let _ = fs::remove_file(&file);
    Ok(edited)
}

fn tempfile_path() -> Result<std::path::PathBuf> {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut path = env::temp_dir();
    path.push(format!("notedesk-{}-{}.txt", std::process::id(), n));
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        assert_eq!(get_editor(Some("my-editor")).unwrap(), "my-editor");
    }

    #[test]
    fn empty_override_falls_through() {
        env::set_var("EDITOR", "env-editor");
        assert_eq!(get_editor(Some("")).unwrap(), "env-editor");
        env::remove_var("EDITOR");
    }

    #[test]
    fn edit_buffer_reads_back_the_file() {
        // `true` leaves the temp file untouched, so the initial text comes back.
        let edited = edit_buffer("true", "unchanged text").unwrap();
        assert_eq!(edited, "unchanged text");
    }

    #[test]
    fn failing_editor_is_reported() {
        let err = edit_buffer("false", "x").unwrap_err();
        assert!(matches!(err, NotedeskError::Editor(_)));
    }
}

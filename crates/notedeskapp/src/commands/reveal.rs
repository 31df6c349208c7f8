use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotedeskError, Result};
use crate::store::NoteStore;
use crate::tabs::TabStrip;

/// Show-hidden flow: on an exact password match a tab opens for the hidden
/// note and becomes selected; otherwise `NoHiddenMatch`, with no state
/// change. The front-end owns the password prompt, so a cancelled prompt
/// never reaches this function.
pub fn run(store: &NoteStore, tabs: &mut TabStrip, password: &str) -> Result<CmdResult> {
    let note = store
        .find_by_password(password)?
        .ok_or(NotedeskError::NoHiddenMatch)?;

    let mut result = CmdResult::default();
    let title = note.title.clone();
    let tab_id = tabs.open(note.id, note.title, note.content);
    result.opened_tabs.push(tab_id);
    result.add_message(CmdMessage::success(format!("Hidden note opened: {}", title)));
    Ok(result)
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NoteDraft;
use crate::store::NoteStore;
use crate::tabs::TabStrip;

/// Persists a new note. If the record is neither hidden nor
/// password-protected a tab opens and becomes selected; otherwise the note
/// is stored but not shown. An empty title fails with `EmptyTitle` before
/// anything is written.
pub fn run(store: &NoteStore, tabs: &mut TabStrip, draft: NoteDraft) -> Result<CmdResult> {
    let id = store.create(&draft)?;
    let title = draft.title.trim().to_string();

    let mut result = CmdResult::default();
    if !draft.hidden && draft.password.as_deref().map_or(true, |p| p.trim().is_empty()) {
        let tab_id = tabs.open(id, title.clone(), draft.content);
        result.opened_tabs.push(tab_id);
        result.add_message(CmdMessage::success(format!("Note created: {}", title)));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Note created (not shown): {}",
            title
        )));
    }
    Ok(result)
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::NoteStore;
use crate::tabs::TabStrip;

/// Opens a tab for every visible note, in insertion order. Each open selects
/// the new tab, so the last loaded note ends up selected.
pub fn run(store: &NoteStore, tabs: &mut TabStrip) -> Result<CmdResult> {
    let notes = store.list_visible()?;
    let mut result = CmdResult::default();
    let count = notes.len();

    for note in notes {
        let tab_id = tabs.open(note.id, note.title, note.content);
        result.opened_tabs.push(tab_id);
    }

    if count > 0 {
        result.add_message(CmdMessage::info(format!(
            "Loaded {} note{}",
            count,
            if count == 1 { "" } else { "s" }
        )));
    }
    Ok(result)
}

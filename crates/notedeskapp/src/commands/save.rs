use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotedeskError, Result};
use crate::store::NoteStore;
use crate::tabs::TabStrip;
use tracing::warn;

/// Save-active flow: writes `title` and `content` over the selected tab's
/// record. `NoSelection` when nothing is selected; `UnboundTab` when the tab
/// has no record id (an invariant breach, logged). There is no existence
/// check: a record deleted out from under the tab makes the update a benign
/// no-op, and the caller is still told the save completed.
///
/// On success the tab's title and buffer are synced to the saved values, so
/// the strip always displays what the store holds.
pub fn run(store: &NoteStore, tabs: &mut TabStrip, title: &str, content: &str) -> Result<CmdResult> {
    let tab = tabs.selected_mut().ok_or(NotedeskError::NoSelection)?;
    let note_id = match tab.note_id {
        Some(id) => id,
        None => {
            warn!(tab = %tab.id, "selected tab has no backing record");
            return Err(NotedeskError::UnboundTab(tab.id));
        }
    };

    store.update(note_id, title, content)?;
    tab.title = title.to_string();
    tab.buffer = content.to_string();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Note updated successfully"));
    Ok(result)
}

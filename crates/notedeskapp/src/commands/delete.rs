use crate::commands::{CmdMessage, CmdResult, ConfirmPrompt};
use crate::error::{NotedeskError, Result};
use crate::store::NoteStore;
use crate::tabs::TabStrip;
use tracing::warn;

/// Delete-active flow: asks the confirmation collaborator, then deletes the
/// selected tab's record and closes the tab. `NoSelection` when nothing is
/// selected. On decline, nothing changes and the result says so.
///
/// A tab with no binding is still closed (the UI must be able to shed it),
/// but that is an invariant breach and gets a warning.
pub fn run(
    store: &NoteStore,
    tabs: &mut TabStrip,
    confirm: &mut impl ConfirmPrompt,
) -> Result<CmdResult> {
    let tab = tabs.selected().ok_or(NotedeskError::NoSelection)?;
    let tab_id = tab.id;
    let title = tab.title.clone();
    let note_id = tab.note_id;

    let mut result = CmdResult::default();
    if !confirm.confirm(&format!("Are you sure you want to delete '{}'?", title)) {
        result.add_message(CmdMessage::info("Delete cancelled"));
        return Ok(result);
    }

    match note_id {
        Some(id) => store.delete(id)?,
        None => {
            warn!(tab = %tab_id, "deleting a tab that has no backing record");
            result.add_message(CmdMessage::warning(
                "Tab was not linked to a stored note; closed it anyway",
            ));
        }
    }

    tabs.close(tab_id);
    result.closed_tab = Some(tab_id);
    result.add_message(CmdMessage::success(format!("Note deleted: {}", title)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::model::NoteDraft;

    #[test]
    fn accepted_delete_removes_record_and_tab() {
        let store = NoteStore::open_in_memory().unwrap();
        let mut tabs = TabStrip::new();
        create::run(&store, &mut tabs, NoteDraft::new("Doomed", "x")).unwrap();
        let note_id = tabs.selected().unwrap().note_id.unwrap();

        let result = run(&store, &mut tabs, &mut |_: &str| true).unwrap();

        assert!(result.closed_tab.is_some());
        assert!(store.get(note_id).unwrap().is_none());
        assert!(tabs.is_empty());
        assert_eq!(tabs.selected_id(), None);
    }

    #[test]
    fn declined_delete_changes_nothing() {
        let store = NoteStore::open_in_memory().unwrap();
        let mut tabs = TabStrip::new();
        create::run(&store, &mut tabs, NoteDraft::new("Spared", "x")).unwrap();
        let note_id = tabs.selected().unwrap().note_id.unwrap();

        let result = run(&store, &mut tabs, &mut |_: &str| false).unwrap();

        assert!(result.closed_tab.is_none());
        assert!(store.get(note_id).unwrap().is_some());
        assert_eq!(tabs.len(), 1);
        assert!(tabs.selected().is_some());
    }

    #[test]
    fn prompt_receives_the_tab_title() {
        let store = NoteStore::open_in_memory().unwrap();
        let mut tabs = TabStrip::new();
        create::run(&store, &mut tabs, NoteDraft::new("Groceries", "")).unwrap();

        let mut seen = String::new();
        let mut prompt = |message: &str| {
            seen = message.to_string();
            false
        };
        run(&store, &mut tabs, &mut prompt).unwrap();
        assert!(seen.contains("Groceries"));
    }

    #[test]
    fn delete_with_no_selection_fails_cleanly() {
        let store = NoteStore::open_in_memory().unwrap();
        let mut tabs = TabStrip::new();

        let err = run(&store, &mut tabs, &mut |_: &str| true).unwrap_err();
        assert!(matches!(err, NotedeskError::NoSelection));
    }

    #[test]
    fn unbound_tab_is_closed_with_a_warning() {
        let store = NoteStore::open_in_memory().unwrap();
        let mut tabs = TabStrip::new();
        tabs.open_unbound("Orphan".into(), "".into());

        let result = run(&store, &mut tabs, &mut |_: &str| true).unwrap();

        assert!(result.closed_tab.is_some());
        assert!(tabs.is_empty());
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning));
    }
}

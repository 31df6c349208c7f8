//! The interactive shell: reads one command per line, drives the session,
//! and renders structured results. All prompts (new-note fields, reveal
//! password, delete confirmation) read from the same input stream, so the
//! shell works identically for a terminal and for piped input.

use anyhow::Result;
use console::style;
use notedeskapp::commands::{CmdResult, MessageLevel};
use notedeskapp::editor;
use notedeskapp::error::NotedeskError;
use notedeskapp::model::NoteDraft;
use notedeskapp::session::Session;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  tabs             list open tabs
  select <n>       switch to tab n
  view             show the active tab
  new              create a note (prompts for fields)
  append <text>    add a line to the active tab's buffer
  edit             open the active tab's buffer in $EDITOR
  save             persist the active tab
  reveal           unlock a hidden note by password
  delete           delete the active note (asks for confirmation)
  help             show this help
  quit             exit";

pub fn run(
    session: &mut Session,
    editor_override: Option<&str>,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    let result = session.open_visible()?;
    render_result(&mut out, &result)?;
    render_tabs(&mut out, session)?;

    loop {
        write!(out, "notedesk> ")?;
        out.flush()?;
        let line = match read_line(&mut input)? {
            Some(line) => line,
            None => break,
        };
        let line = line.trim();
        let (cmd, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        let outcome = match cmd {
            "" => Ok(()),
            "help" => {
                writeln!(out, "{}", HELP)?;
                Ok(())
            }
            "tabs" => render_tabs(&mut out, session),
            "select" => cmd_select(session, &mut out, rest),
            "view" => cmd_view(session, &mut out),
            "new" => cmd_new(session, &mut input, &mut out),
            "append" => cmd_append(session, &mut out, rest),
            "edit" => cmd_edit(session, editor_override, &mut out),
            "save" => cmd_save(session, &mut out),
            "reveal" => cmd_reveal(session, &mut input, &mut out),
            "delete" => cmd_delete(session, &mut input, &mut out),
            "quit" | "exit" => break,
            other => {
                writeln!(
                    out,
                    "{}",
                    style(format!("Unknown command: {} (try 'help')", other)).red()
                )?;
                Ok(())
            }
        };

        // Core errors are user-visible outcomes, not process failures.
        if let Err(e) = outcome {
            match e.downcast::<NotedeskError>() {
                Ok(core) => writeln!(out, "{}", style(core).red())?,
                Err(other) => return Err(other),
            }
        }
    }
    Ok(())
}

fn cmd_select(session: &mut Session, out: &mut impl Write, rest: &str) -> Result<()> {
    let n: usize = match rest.parse() {
        Ok(n) if n >= 1 => n,
        _ => {
            writeln!(out, "{}", style("Usage: select <n>").red())?;
            return Ok(());
        }
    };
    match session.tabs().get(n - 1).map(|t| t.id) {
        Some(id) => {
            session.select_tab(id);
            render_tabs(out, session)
        }
        None => {
            writeln!(out, "{}", style(format!("No tab {}", n)).red())?;
            Ok(())
        }
    }
}

fn cmd_view(session: &Session, out: &mut impl Write) -> Result<()> {
    let tab = session.selected_tab().ok_or(NotedeskError::NoSelection)?;
    writeln!(out, "{}", style(&tab.title).bold())?;
    if !tab.buffer.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", tab.buffer)?;
    }
    Ok(())
}

fn cmd_new(session: &mut Session, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let title = prompt(input, out, "Title: ")?.unwrap_or_default();

    writeln!(out, "Content (finish with a single '.'):")?;
    let mut lines = Vec::new();
    loop {
        match read_line(input)? {
            Some(line) if line.trim() == "." => break,
            Some(line) => lines.push(line),
            None => break,
        }
    }
    let content = lines.join("\n");

    let password = prompt(input, out, "Password (empty for none): ")?.unwrap_or_default();
    let hidden = prompt(input, out, "Hide note? [y/N]: ")?
        .map(|a| is_yes(&a))
        .unwrap_or(false);

    let mut draft = NoteDraft::new(title, content).hidden(hidden);
    draft = draft.with_password(password);
    let result = session.create_note(draft)?;
    render_result(out, &result)?;
    Ok(())
}

fn cmd_append(session: &mut Session, out: &mut impl Write, rest: &str) -> Result<()> {
    let tab = session.selected_tab().ok_or(NotedeskError::NoSelection)?;
    let buffer = if tab.buffer.is_empty() {
        rest.to_string()
    } else {
        format!("{}\n{}", tab.buffer, rest)
    };
    session.edit_active_buffer(buffer)?;
    writeln!(out, "{}", style("Appended (not yet saved)").dim())?;
    Ok(())
}

fn cmd_edit(
    session: &mut Session,
    editor_override: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let tab = session.selected_tab().ok_or(NotedeskError::NoSelection)?;
    let editor = editor::get_editor(editor_override)?;
    let edited = editor::edit_buffer(&editor, &tab.buffer)?;
    session.edit_active_buffer(edited)?;
    writeln!(out, "{}", style("Buffer updated (not yet saved)").dim())?;
    Ok(())
}

fn cmd_save(session: &mut Session, out: &mut impl Write) -> Result<()> {
    let tab = session.selected_tab().ok_or(NotedeskError::NoSelection)?;
    let (title, content) = (tab.title.clone(), tab.buffer.clone());
    let result = session.save_active(&title, &content)?;
    render_result(out, &result)?;
    Ok(())
}

fn cmd_reveal(session: &mut Session, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let password = match prompt(input, out, "Password: ")? {
        Some(p) if !p.trim().is_empty() => p.trim().to_string(),
        // A cancelled or empty prompt never reaches the core.
        _ => {
            writeln!(out, "{}", style("Cancelled").dim())?;
            return Ok(());
        }
    };
    let result = session.reveal_hidden(&password)?;
    render_result(out, &result)?;
    render_tabs(out, session)?;
    Ok(())
}

fn cmd_delete(session: &mut Session, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    // Peek first so "no selection" is reported before any prompt appears.
    if session.selected_tab().is_none() {
        return Err(NotedeskError::NoSelection.into());
    }

    let mut answer = Ok(false);
    let mut confirm = |message: &str| -> bool {
        answer = prompt(input, out, &format!("{} [y/N]: ", message)).map(|a| match a {
            Some(a) => is_yes(&a),
            None => false,
        });
        *answer.as_ref().unwrap_or(&false)
    };
    let result = session.delete_active(&mut confirm)?;
    answer?;
    render_result(out, &result)?;
    Ok(())
}

fn render_result(out: &mut impl Write, result: &CmdResult) -> Result<()> {
    for message in &result.messages {
        let rendered = match message.level {
            MessageLevel::Info => style(&message.content).dim(),
            MessageLevel::Success => style(&message.content).green(),
            MessageLevel::Warning => style(&message.content).yellow(),
        };
        writeln!(out, "{}", rendered)?;
    }
    Ok(())
}

fn render_tabs(out: &mut impl Write, session: &Session) -> Result<()> {
    if session.tabs().is_empty() {
        writeln!(out, "{}", style("No open tabs").dim())?;
        return Ok(());
    }
    let selected = session.selected_tab().map(|t| t.id);
    for (i, tab) in session.tabs().iter().enumerate() {
        let marker = if Some(tab.id) == selected { "*" } else { " " };
        writeln!(out, "{} {} {}", marker, i + 1, tab.title)?;
    }
    Ok(())
}

fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    text: &str,
) -> std::io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;
    read_line(input)
}

fn read_line(input: &mut impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

//! Line-oriented command shell.
//!
//! Each input line maps to one UI action on the controller; the pending
//! message auto-clear is polled before and after every action.

use crate::render::{render_alert, render_list, render_view};
use log::warn;
use notepad_core::{Clock, ControllerError, NoteController, NoteId, NoteRepository};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  add                 start a new note
  title <text>        set the draft title
  content <text>      set the draft content
  save                save the new note
  select <n|id>       select a note by list position or id
  edit [<n|id>]       edit a note (default: selected)
  update              save the edited note
  delete [<n|id>]     delete a note (default: selected)
  show                redraw the screen
  help                show this help
  quit                leave";

/// Reference to a note typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteRef {
    /// 1-based position in the list pane.
    Position(usize),
    Id(NoteId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Title(String),
    Content(String),
    Save,
    Select(NoteRef),
    Edit(Option<NoteRef>),
    Update,
    Delete(Option<NoteRef>),
    Show,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }

    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (trimmed, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" | "+" => Command::Add,
        // Draft text is taken verbatim after the single separating space.
        "title" => Command::Title(rest.to_string()),
        "content" => Command::Content(rest.to_string()),
        "save" => Command::Save,
        "select" => Command::Select(
            parse_note_ref(rest)?.ok_or_else(|| "select needs a list position or id".to_string())?,
        ),
        "edit" => Command::Edit(parse_note_ref(rest)?),
        "update" => Command::Update,
        "delete" => Command::Delete(parse_note_ref(rest)?),
        "show" | "ls" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };
    Ok(Some(command))
}

fn parse_note_ref(value: &str) -> Result<Option<NoteRef>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(position) = value.parse::<usize>() {
        if position == 0 {
            return Err("list positions start at 1".to_string());
        }
        return Ok(Some(NoteRef::Position(position)));
    }
    value
        .parse::<NoteId>()
        .map(|id| Some(NoteRef::Id(id)))
        .map_err(|_| format!("`{value}` is neither a list position nor a note id"))
}

/// Runs the shell until `quit` or end of input.
pub fn run<R: NoteRepository, C: Clock>(
    controller: &mut NoteController<R, C>,
    input: impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    render_screen(controller, out)?;
    for line in input.lines() {
        let line = line?;
        controller.tick();

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "error: {message}")?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Title(text) => controller.set_draft_title(text),
            Command::Content(text) => controller.set_draft_content(text),
            other => {
                if let Err(message) = dispatch(controller, other) {
                    writeln!(out, "error: {message}")?;
                }
            }
        }

        controller.tick();
        render_screen(controller, out)?;
    }
    out.flush()
}

fn dispatch<R: NoteRepository, C: Clock>(
    controller: &mut NoteController<R, C>,
    command: Command,
) -> Result<(), String> {
    let result = match command {
        Command::Add => {
            controller.start_create();
            Ok(())
        }
        Command::Save => controller.save_new().map(|_| ()),
        Command::Select(note_ref) => {
            let id = resolve(controller, Some(note_ref))?;
            controller.select(id);
            Ok(())
        }
        Command::Edit(note_ref) => {
            let id = resolve(controller, note_ref)?;
            controller.enter_edit(id)
        }
        Command::Update => controller.save_edit(),
        Command::Delete(note_ref) => {
            let id = resolve(controller, note_ref)?;
            controller.delete(id).map(|_| ())
        }
        Command::Show => Ok(()),
        Command::Title(_) | Command::Content(_) | Command::Help | Command::Quit => Ok(()),
    };

    match result {
        Ok(()) => Ok(()),
        // Rendered through the alert pane.
        Err(ControllerError::Validation(_)) => Ok(()),
        Err(err) => {
            warn!("event=cli_command module=cli status=error error={err}");
            Err(err.to_string())
        }
    }
}

fn resolve<R: NoteRepository, C: Clock>(
    controller: &NoteController<R, C>,
    note_ref: Option<NoteRef>,
) -> Result<NoteId, String> {
    match note_ref {
        None => controller
            .selected_id()
            .ok_or_else(|| "no note is selected".to_string()),
        Some(NoteRef::Id(id)) => Ok(id),
        Some(NoteRef::Position(position)) => controller
            .notes()
            .get(position - 1)
            .map(|note| note.id)
            .ok_or_else(|| format!("no note at position {position}")),
    }
}

fn render_screen<R: NoteRepository, C: Clock>(
    controller: &NoteController<R, C>,
    out: &mut impl Write,
) -> io::Result<()> {
    render_list(&controller.list_items(), out)?;
    render_view(&controller.view(), out)?;
    render_alert(controller.validation_errors(), out)?;
    write!(out, "> ")?;
    out.flush()
}

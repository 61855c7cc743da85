//! Plain-text rendering of the derived view.

use notepad_core::{NoteForm, NoteListItem, NoteView};
use std::io::{self, Write};

pub fn render_list(items: &[NoteListItem], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Notes:")?;
    for (index, item) in items.iter().enumerate() {
        let marker = if item.active { '*' } else { ' ' };
        writeln!(out, "  {:>2}. {marker} {}", index + 1, item.title)?;
    }
    writeln!(out, "  [+] add")
}

pub fn render_view(view: &NoteView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "----")?;
    match view {
        NoteView::CreateForm(form) | NoteView::EditForm(form) => render_form(form, out),
        NoteView::Empty { message } | NoteView::PleaseSelect { message } => {
            writeln!(out, "{message}")
        }
        NoteView::Detail(note) => {
            writeln!(out, "[edit] [delete]")?;
            writeln!(out, "## {}", note.title)?;
            writeln!(out, "{}", note.content)
        }
    }
}

pub fn render_alert(messages: &[String], out: &mut impl Write) -> io::Result<()> {
    for message in messages {
        writeln!(out, "! {message}")?;
    }
    Ok(())
}

fn render_form(form: &NoteForm, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "== {} ==", form.form_title)?;
    writeln!(out, "title: {}", form.title)?;
    writeln!(out, "content: {}", form.content)?;
    writeln!(out, "[{}]", form.submit_label)
}

#[cfg(test)]
mod tests {
    use super::{render_list, render_view};
    use notepad_core::{Locale, Note, NoteId, NoteListItem, NoteView};

    #[test]
    fn list_marks_active_row() {
        let items = vec![
            NoteListItem {
                id: NoteId::generate(),
                title: "first".to_string(),
                active: false,
            },
            NoteListItem {
                id: NoteId::generate(),
                title: "second".to_string(),
                active: true,
            },
        ];
        let mut out = Vec::new();
        render_list(&items, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("   1.   first"));
        assert!(text.contains("   2. * second"));
    }

    #[test]
    fn detail_shows_affordances_and_body() {
        let view = NoteView::Detail(Note {
            id: NoteId::generate(),
            title: "T".to_string(),
            content: "body".to_string(),
        });
        let mut out = Vec::new();
        render_view(&view, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[edit] [delete]"));
        assert!(text.contains("## T\nbody"));
    }

    #[test]
    fn placeholder_prints_message() {
        let message = Locale::En.messages().no_notes;
        let mut out = Vec::new();
        render_view(&NoteView::Empty { message }, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains(message));
    }
}

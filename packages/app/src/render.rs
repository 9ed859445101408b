//! Text rendering of store snapshots
//!
//! Rendering is a pure function of a `StoreSnapshot`; nothing here holds
//! state or talks to the store.

use std::io::{self, Write};

use notecrud_core::{Category, EditMode, EmptyState, Note, StoreSnapshot};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render the form, the search line and the filtered note list
pub fn render_snapshot<W: Write>(out: &mut W, snapshot: &StoreSnapshot) -> io::Result<()> {
    match snapshot.mode {
        EditMode::Creating => writeln!(out, "== Create New Note ==")?,
        EditMode::Editing(id) => writeln!(out, "== Edit Note #{} ==", id)?,
    }
    writeln!(out, "  Title:    {}", snapshot.draft.title)?;
    writeln!(out, "  Category: {}", snapshot.draft.category)?;
    writeln!(out, "  Content:  {}", snapshot.draft.content)?;

    if !snapshot.search_term.is_empty() {
        writeln!(out, "Search: \"{}\"", snapshot.search_term)?;
    }

    writeln!(out)?;
    writeln!(out, "Your Notes ({})", snapshot.notes.len())?;

    match snapshot.empty_state {
        Some(EmptyState::NoNotes) => {
            writeln!(out, "  No notes yet! Create your first note to get started.")?;
        }
        Some(EmptyState::NoMatches) => {
            writeln!(out, "  No notes match your search. Try a different search term.")?;
        }
        None => {
            for note in &snapshot.notes {
                render_note(out, note)?;
            }
        }
    }

    Ok(())
}

/// Render a single note card
pub fn render_note<W: Write>(out: &mut W, note: &Note) -> io::Result<()> {
    writeln!(out, "  #{} [{}] {}", note.id, note.category, note.title)?;
    for line in note.content.lines() {
        writeln!(out, "      {}", line)?;
    }

    write!(out, "      Created: {}", note.created_at.format(DATE_FORMAT))?;
    if note.was_edited() {
        write!(out, "  Updated: {}", note.updated_at.format(DATE_FORMAT))?;
    }
    writeln!(out)
}

pub fn render_categories<W: Write>(out: &mut W) -> io::Result<()> {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    writeln!(out, "Categories: {}", labels.join(", "))
}

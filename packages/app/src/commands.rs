//! Input commands
//!
//! One command per input line. The first word selects the command and the
//! trimmed remainder of the line is its argument, so titles and content can
//! contain spaces.

use notecrud_core::{Category, NoteId, ValidationError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0} (type 'help' for a list)")]
    Unknown(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("Invalid note id: {0}")]
    InvalidId(String),

    #[error(transparent)]
    InvalidCategory(#[from] ValidationError),
}

/// A user intent read from the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    List,
    Categories,
    Title(String),
    Content(String),
    Category(Category),
    Save,
    Edit(NoteId),
    Cancel,
    Delete(NoteId),
    Search(String),
    Quit,
}

impl Command {
    /// Parse one input line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (trimmed, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "help" | "?" => Command::Help,
            "list" | "ls" => Command::List,
            "categories" => Command::Categories,
            "title" => Command::Title(rest.trim().to_string()),
            "content" => Command::Content(rest.trim().to_string()),
            "category" => {
                Command::Category(required(rest, "category", "a category name")?.parse()?)
            }
            "save" => Command::Save,
            "edit" => Command::Edit(parse_id(required(rest, "edit", "a note id")?)?),
            "cancel" => Command::Cancel,
            "delete" | "rm" => {
                Command::Delete(parse_id(required(rest, "delete", "a note id")?)?)
            }
            "search" => Command::Search(rest.trim().to_string()),
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, CommandError> {
    let rest = rest.trim();
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, what })
    } else {
        Ok(rest)
    }
}

fn parse_id(raw: &str) -> Result<NoteId, CommandError> {
    raw.parse().map_err(|_| CommandError::InvalidId(raw.to_string()))
}

pub const HELP: &str = "\
Commands:
  list                 show the form and the (filtered) notes
  title <text>         set the draft title
  content <text>       set the draft content
  category <name>      set the draft category
  categories           list the available categories
  save                 create a note, or update the one being edited
  edit <id>            load a note into the draft for editing
  cancel               stop editing and clear the draft
  delete <id>          delete a note (asks for confirmation)
  search [term]        filter notes; no term clears the filter
  quit                 leave";

//! Session Tests
//!
//! Drives the terminal front end with scripted input and checks both the
//! rendered output and the resulting store state.

use std::io::Cursor;

use notecrud_app_lib::{AppConfig, Session};
use notecrud_core::{Category, EditMode, NoteId};

/// Run `script` through a fresh session, returning the session and its output
fn run_script(script: &str) -> (Session<Cursor<Vec<u8>>, Vec<u8>>, String) {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut session = Session::new(AppConfig::default(), input, Vec::new()).unwrap();
    session.run().unwrap();
    let output = String::from_utf8(session.output().clone()).unwrap();
    (session, output)
}

#[test]
fn test_create_and_list() {
    let (session, output) = run_script(
        "title Groceries\ncontent milk, eggs\ncategory personal\nsave\nlist\nquit\n",
    );

    assert!(output.contains("Saved note #1"));
    assert!(output.contains("#1 [Personal] Groceries"));
    assert_eq!(session.store().len(), 1);
    assert_eq!(session.store().notes()[0].category, Category::Personal);
}

#[test]
fn test_validation_error_is_reported_and_nothing_saved() {
    let (session, output) = run_script("title Only a title\nsave\n");

    assert!(output.contains("error: Note validation failed: content cannot be empty"));
    assert!(session.store().is_empty());
    assert_eq!(session.store().draft().title, "Only a title");
}

#[test]
fn test_edit_and_update() {
    let (session, output) = run_script(
        "title Meeting\ncontent standup\nsave\nedit 1\ncontent standup notes\nsave\n",
    );

    assert!(output.contains("== Edit Note #1 =="));
    let note = &session.store().notes()[0];
    assert_eq!(note.content, "standup notes");
    assert_eq!(session.store().edit_mode(), EditMode::Creating);
}

#[test]
fn test_delete_requires_confirmation() {
    let (session, output) =
        run_script("title A\ncontent a\nsave\ndelete 1\nn\ndelete 1\nyes\n");

    assert!(output.contains("Are you sure you want to delete note #1 \"A\"? [y/N]"));
    assert!(output.contains("Kept note #1"));
    assert!(output.contains("Deleted note #1"));
    assert!(session.store().is_empty());
}

#[test]
fn test_delete_unknown_note_does_not_prompt() {
    let (_session, output) = run_script("delete 9\n");

    assert!(output.contains("error: Note not found: 9"));
    assert!(!output.contains("Are you sure"));
}

#[test]
fn test_search_filters_rendered_notes() {
    let (session, output) = run_script(
        "title Groceries\ncontent milk\nsave\ntitle Meeting\ncontent standup\ncategory work\nsave\nsearch MILK\n",
    );

    let last_render = output.rsplit("Your Notes").next().unwrap();
    assert!(last_render.contains("Groceries"));
    assert!(!last_render.contains("Meeting"));
    assert_eq!(session.store().search_term(), "MILK");
    assert_eq!(session.store().len(), 2);
}

#[test]
fn test_cancel_edit_and_bad_commands() {
    let (session, output) = run_script("title A\ncontent a\nsave\nedit 1\ncancel\nedit x\nfly\n");

    assert!(output.contains("error: Invalid note id: x"));
    assert!(output.contains("error: Unknown command: fly"));
    assert_eq!(session.store().edit_mode(), EditMode::Creating);
    assert!(session.store().get(NoteId::new(1)).is_some());
}

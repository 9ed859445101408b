//! Data Models
//!
//! This module contains the data structures the note store works with:
//!
//! - `Note` / `NoteId` - A stored note and its identity
//! - `NoteDraft` - The staging area shared by create and update
//! - `Category` - The fixed set of note categories
//! - `EditMode` - Whether the draft targets a new note or an existing one
//! - `time` - Clock abstraction used for note timestamps

mod category;
mod edit_mode;
mod note;
pub mod time;

pub use category::Category;
pub use edit_mode::EditMode;
pub use note::{Note, NoteDraft, NoteId, ValidationError};

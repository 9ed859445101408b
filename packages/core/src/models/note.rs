//! Note Data Structures
//!
//! This module defines the `Note` record, its identifier, and the `NoteDraft`
//! staging area shared by the create and update flows.
//!
//! # Examples
//!
//! ```rust
//! use notecrud_core::models::{Category, NoteDraft};
//! use notecrud_core::NoteStoreConfig;
//!
//! let draft = NoteDraft::new("Groceries", "milk, eggs", Category::Personal);
//! assert!(draft.validate(&NoteStoreConfig::default()).is_ok());
//!
//! let blank = NoteDraft::new("   ", "milk, eggs", Category::Personal);
//! assert!(blank.validate(&NoteStoreConfig::default()).is_err());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::Category;
use crate::config::NoteStoreConfig;

/// Validation errors for note drafts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Unique note identifier
///
/// Issued by `NoteStore` from a monotonic counter, so a later note always
/// carries a larger id than an earlier one from the same store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(NoteId)
    }
}

/// Content staged for a create or an update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: Category,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category,
        }
    }

    /// Check the draft against the store's field rules
    ///
    /// Title and content must be non-empty after trimming and must fit the
    /// configured character limits. The title is checked first.
    pub fn validate(&self, config: &NoteStoreConfig) -> Result<(), ValidationError> {
        check_field("title", &self.title, config.max_title_length)?;
        check_field("content", &self.content, config.max_content_length)?;
        Ok(())
    }
}

fn check_field(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

impl From<&Note> for NoteDraft {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            category: note.category,
        }
    }
}

/// A single user-authored note
///
/// # Fields
///
/// - `id`: Assigned at creation, never changes
/// - `title` / `content`: Opaque text, stored exactly as entered
/// - `category`: One of the fixed [`Category`] values
/// - `created_at`: Fixed at creation
/// - `updated_at`: Equal to `created_at` until the first update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub(crate) fn from_draft(id: NoteId, draft: NoteDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            category: draft.category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields and restamp `updated_at`
    ///
    /// A clock that runs backwards never pushes `updated_at` below
    /// `created_at`.
    pub(crate) fn apply(&mut self, draft: NoteDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.content = draft.content;
        self.category = draft.category;
        self.updated_at = now.max(self.created_at);
    }

    /// Whether the note has been updated since it was created
    pub fn was_edited(&self) -> bool {
        self.updated_at != self.created_at
    }

    /// Case-insensitive substring match over title, content and category
    ///
    /// `needle` must already be lowercased. An empty needle matches.
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.category.label().to_lowercase().contains(needle)
    }
}

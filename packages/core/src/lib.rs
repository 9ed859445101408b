//! NoteCrud Core
//!
//! In-memory note store for the NoteCrud note-taking widget: titled,
//! categorized notes that can be created, searched, edited in place and
//! deleted.
//!
//! # Architecture
//!
//! - **Single owner**: `NoteStore` holds the collection and the form state
//!   (draft, edit mode, search term); renderers only read it and call its
//!   operations
//! - **Validation gates mutation**: a rejected operation returns an error and
//!   leaves the store unchanged
//! - **Memory only**: nothing is persisted; state lives as long as the store
//!
//! # Modules
//!
//! - [`models`] - Data structures (Note, NoteDraft, Category, EditMode)
//! - [`services`] - NoteStore, its errors and render snapshots
//! - [`events`] - Change events broadcast after successful operations
//! - [`config`] - Store configuration

pub mod config;
pub mod events;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::{ConfigError, NoteStoreConfig};
pub use events::StoreEvent;
pub use models::*;
pub use services::*;

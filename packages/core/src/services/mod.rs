//! Business Services
//!
//! - `NoteStore` - Note collection with CRUD, search and edit-mode state
//! - `StoreSnapshot` - Owned, serializable view of the store for renderers
//! - `NoteStoreError` - Failures reported by store operations

pub mod error;
pub mod note_store;
pub mod snapshot;

pub use error::NoteStoreError;
pub use note_store::NoteStore;
pub use snapshot::{EmptyState, StoreSnapshot};

//! Change Events for NoteStore
//!
//! `NoteStore` emits a `StoreEvent` after every successful state change so a
//! renderer can refresh without polling. Events travel over a tokio
//! broadcast channel; subscribers call `try_recv` (or `recv().await` from an
//! async context) on the receiver returned by `NoteStore::subscribe`.
//!
//! # Event Flow
//!
//! 1. A store operation validates its input and mutates state
//! 2. The matching event is sent on the broadcast channel
//! 3. Every live subscriber receives its own copy
//!
//! Rejected operations emit nothing.

use tokio::sync::broadcast;

use crate::models::{Note, NoteId};

/// Receiving end handed out by `NoteStore::subscribe`
pub type EventReceiver = broadcast::Receiver<StoreEvent>;

/// Events emitted by NoteStore
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A new note was prepended to the collection
    NoteCreated(Note),

    /// An existing note was updated in place
    NoteUpdated(Note),

    /// A note was removed
    NoteDeleted { id: NoteId },

    /// The draft now targets an existing note
    EditStarted { id: NoteId },

    /// Edit mode was left without saving
    EditCancelled,
}

impl StoreEvent {
    /// Get a string representation of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            StoreEvent::NoteCreated(_) => "note:created",
            StoreEvent::NoteUpdated(_) => "note:updated",
            StoreEvent::NoteDeleted { .. } => "note:deleted",
            StoreEvent::EditStarted { .. } => "edit:started",
            StoreEvent::EditCancelled => "edit:cancelled",
        }
    }

    /// The note this event concerns, if any
    pub fn note_id(&self) -> Option<NoteId> {
        match self {
            StoreEvent::NoteCreated(note) | StoreEvent::NoteUpdated(note) => Some(note.id),
            StoreEvent::NoteDeleted { id } | StoreEvent::EditStarted { id } => Some(*id),
            StoreEvent::EditCancelled => None,
        }
    }
}

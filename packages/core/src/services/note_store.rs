//! Note Store
//!
//! `NoteStore` owns the note collection together with the form state that
//! drives it: the shared draft, the edit mode and the search term. A
//! renderer reads the store (directly or through [`NoteStore::snapshot`])
//! and forwards user intents to the operations below.
//!
//! # Operations
//!
//! | Operation         | Mode change               | Errors                         |
//! |-------------------|---------------------------|--------------------------------|
//! | `create`          | none                      | `ValidationFailed`             |
//! | `update`          | -> `Creating`             | `NoteNotFound`, `ValidationFailed` |
//! | `delete`          | -> `Creating` if edited   | `NoteNotFound`                 |
//! | `start_edit`      | -> `Editing(id)`          | `NoteNotFound`                 |
//! | `cancel_edit`     | -> `Creating`             | none                           |
//! | `set_search_term` | none                      | none                           |
//!
//! A failing operation never mutates the store.
//!
//! The store is single-threaded: every mutating call takes `&mut self`, so
//! operations run one at a time in the order the caller issues them.

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::config::NoteStoreConfig;
use crate::events::{EventReceiver, StoreEvent};
use crate::models::time::{SystemTimeProvider, TimeProvider};
use crate::models::{Category, EditMode, Note, NoteDraft, NoteId};
use crate::services::error::NoteStoreError;
use crate::services::snapshot::{EmptyState, StoreSnapshot};

/// In-memory note collection with create/edit/search state
///
/// # Examples
///
/// ```rust
/// use notecrud_core::{Category, NoteDraft, NoteStore};
///
/// let mut store = NoteStore::new();
/// let groceries = store
///     .create(NoteDraft::new("Groceries", "milk, eggs", Category::Personal))
///     .unwrap();
/// store
///     .create(NoteDraft::new("Meeting", "standup notes", Category::Work))
///     .unwrap();
///
/// let found = store.read("MILK");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].id, groceries.id);
/// ```
pub struct NoteStore {
    /// Newest first
    notes: Vec<Note>,

    draft: NoteDraft,

    edit_mode: EditMode,

    search_term: String,

    next_id: u64,

    config: NoteStoreConfig,

    time_provider: Arc<dyn TimeProvider>,

    /// Broadcast channel for change events
    event_tx: broadcast::Sender<StoreEvent>,
}

impl NoteStore {
    /// Create an empty store with default configuration
    pub fn new() -> Self {
        Self::build(NoteStoreConfig::default())
    }

    /// Create an empty store after validating `config`
    pub fn with_config(config: NoteStoreConfig) -> Result<Self, NoteStoreError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: NoteStoreConfig) -> Self {
        let (event_tx, _) = broadcast::channel(config.event_capacity);

        Self {
            notes: Vec::new(),
            draft: NoteDraft::default(),
            edit_mode: EditMode::Creating,
            search_term: String::new(),
            next_id: 1,
            config,
            time_provider: Arc::new(SystemTimeProvider),
            event_tx,
        }
    }

    /// Replace the clock used for `created_at` / `updated_at`
    pub fn with_time_provider(mut self, time_provider: Arc<dyn TimeProvider>) -> Self {
        self.time_provider = time_provider;
        self
    }

    pub fn config(&self) -> &NoteStoreConfig {
        &self.config
    }

    /// Subscribe to change events
    ///
    /// The receiver only sees events emitted after this call.
    pub fn subscribe(&self) -> EventReceiver {
        self.event_tx.subscribe()
    }

    /// Ignores errors if no subscribers
    fn emit_event(&self, event: StoreEvent) {
        let _ = self.event_tx.send(event);
    }

    fn allocate_id(&mut self) -> NoteId {
        let id = NoteId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    fn reset_form(&mut self) {
        self.edit_mode = EditMode::Creating;
        self.draft = NoteDraft::default();
    }

    /// Create a note from `draft`
    ///
    /// The note gets a fresh id, `created_at == updated_at == now`, and is
    /// placed first in the collection. The staged draft is reset afterwards;
    /// the edit mode is left alone.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` if the title or content is blank or too long.
    pub fn create(&mut self, draft: NoteDraft) -> Result<Note, NoteStoreError> {
        if let Err(e) = draft.validate(&self.config) {
            tracing::warn!("Rejected note creation: {}", e);
            return Err(e.into());
        }

        let id = self.allocate_id();
        let note = Note::from_draft(id, draft, self.time_provider.now());
        self.notes.insert(0, note.clone());
        self.draft = NoteDraft::default();

        tracing::debug!("Created note {} ({} notes)", id, self.notes.len());
        self.emit_event(StoreEvent::NoteCreated(note.clone()));
        Ok(note)
    }

    /// Notes matching `term`, in collection order
    ///
    /// Matching is a case-insensitive substring test over title, content and
    /// category label. An empty term matches every note.
    pub fn read(&self, term: &str) -> Vec<&Note> {
        let needle = term.to_lowercase();
        self.notes
            .iter()
            .filter(|note| note.matches(&needle))
            .collect()
    }

    /// Update the editable fields of note `id` in place
    ///
    /// Keeps the note's position and `created_at`, stamps `updated_at`, then
    /// leaves edit mode and resets the draft.
    ///
    /// # Errors
    ///
    /// - `NoteNotFound` if no note has this id
    /// - `ValidationFailed` if the title or content is blank or too long
    pub fn update(&mut self, id: NoteId, draft: NoteDraft) -> Result<Note, NoteStoreError> {
        let Some(index) = self.position(id) else {
            tracing::warn!("Rejected update of unknown note {}", id);
            return Err(NoteStoreError::note_not_found(id));
        };

        if let Err(e) = draft.validate(&self.config) {
            tracing::warn!("Rejected update of note {}: {}", id, e);
            return Err(e.into());
        }

        let now = self.time_provider.now();
        let note = &mut self.notes[index];
        note.apply(draft, now);
        let note = note.clone();
        self.reset_form();

        tracing::debug!("Updated note {}", id);
        self.emit_event(StoreEvent::NoteUpdated(note.clone()));
        Ok(note)
    }

    /// Remove note `id`
    ///
    /// The caller is responsible for confirming the deletion with the user
    /// first. Deleting the note currently being edited also leaves edit mode
    /// and resets the draft.
    ///
    /// # Errors
    ///
    /// `NoteNotFound` if no note has this id.
    pub fn delete(&mut self, id: NoteId) -> Result<Note, NoteStoreError> {
        let Some(index) = self.position(id) else {
            tracing::warn!("Rejected delete of unknown note {}", id);
            return Err(NoteStoreError::note_not_found(id));
        };

        let removed = self.notes.remove(index);
        if self.edit_mode.target() == Some(id) {
            tracing::debug!("Deleted note {} was being edited, leaving edit mode", id);
            self.reset_form();
        }

        tracing::debug!("Deleted note {} ({} notes left)", id, self.notes.len());
        self.emit_event(StoreEvent::NoteDeleted { id });
        Ok(removed)
    }

    /// Load note `id` into the draft and enter edit mode
    ///
    /// Calling this while already editing switches to the new target.
    ///
    /// # Errors
    ///
    /// `NoteNotFound` if no note has this id.
    pub fn start_edit(&mut self, id: NoteId) -> Result<(), NoteStoreError> {
        let note = self.get(id).ok_or_else(|| {
            tracing::warn!("Rejected edit of unknown note {}", id);
            NoteStoreError::note_not_found(id)
        })?;

        let draft = NoteDraft::from(note);
        self.draft = draft;
        self.edit_mode = EditMode::Editing(id);

        tracing::debug!("Editing note {}", id);
        self.emit_event(StoreEvent::EditStarted { id });
        Ok(())
    }

    /// Leave edit mode and reset the draft
    ///
    /// Safe to call when already creating; only an actual exit from edit
    /// mode emits `EditCancelled`.
    pub fn cancel_edit(&mut self) {
        let was_editing = self.edit_mode.is_editing();
        self.reset_form();

        if was_editing {
            tracing::debug!("Edit cancelled");
            self.emit_event(StoreEvent::EditCancelled);
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Notes matching the current search term
    pub fn filtered(&self) -> Vec<&Note> {
        self.read(&self.search_term)
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// The whole collection, newest first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn draft(&self) -> &NoteDraft {
        &self.draft
    }

    /// Replace the whole draft
    pub fn set_draft(&mut self, draft: NoteDraft) {
        self.draft = draft;
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    pub fn set_draft_category(&mut self, category: Category) {
        self.draft.category = category;
    }

    /// Save the staged draft
    ///
    /// Creates a note while in `Creating` mode and updates the edited note
    /// while in `Editing` mode. On failure the draft is kept so the user can
    /// fix it.
    pub fn submit(&mut self) -> Result<Note, NoteStoreError> {
        let draft = self.draft.clone();
        match self.edit_mode {
            EditMode::Creating => self.create(draft),
            EditMode::Editing(id) => self.update(id, draft),
        }
    }

    /// Owned view of everything a renderer needs
    pub fn snapshot(&self) -> StoreSnapshot {
        let notes: Vec<Note> = self.filtered().into_iter().cloned().collect();
        let empty_state = if self.notes.is_empty() {
            Some(EmptyState::NoNotes)
        } else if notes.is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        };

        StoreSnapshot {
            mode: self.edit_mode,
            draft: self.draft.clone(),
            search_term: self.search_term.clone(),
            total: self.notes.len(),
            notes,
            empty_state,
        }
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

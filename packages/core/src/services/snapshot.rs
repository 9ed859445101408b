//! Render Snapshot
//!
//! An owned, serializable copy of the store state a renderer needs: the form
//! (mode and draft), the search term, and the filtered notes. JSON field names
//! are camelCase so the snapshot can be handed to a web front end unchanged.

use serde::{Deserialize, Serialize};

use crate::models::{EditMode, Note, NoteDraft};

/// Why the filtered note list is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyState {
    /// The collection itself is empty
    NoNotes,

    /// Notes exist but none matches the search term
    NoMatches,
}

/// Point-in-time view of a `NoteStore`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub mode: EditMode,
    pub draft: NoteDraft,
    pub search_term: String,

    /// Size of the whole collection, not of `notes`
    pub total: usize,

    /// Notes matching `search_term`, newest first
    pub notes: Vec<Note>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

#[cfg(test)]
mod tests {
    use crate::models::{Category, NoteDraft};
    use crate::NoteStore;

    /// Contract test: documents the JSON shape handed to renderers
    #[test]
    fn test_snapshot_serialization_contract() {
        let mut store = NoteStore::new();
        let note = store
            .create(NoteDraft::new("Groceries", "milk", Category::Personal))
            .unwrap();
        store.start_edit(note.id).unwrap();
        store.set_search_term("milk");

        let parsed = serde_json::to_value(store.snapshot()).unwrap();

        assert_eq!(parsed["mode"]["mode"], "editing");
        assert_eq!(parsed["mode"]["id"], 1);
        assert_eq!(parsed["draft"]["title"], "Groceries");
        assert_eq!(parsed["searchTerm"], "milk");
        assert_eq!(parsed["total"], 1);
        assert_eq!(parsed["notes"][0]["category"], "Personal");
        // Omitted entirely when the list is not empty
        assert!(parsed.get("emptyState").is_none());
    }

    #[test]
    fn test_empty_state_serialization() {
        let store = NoteStore::new();
        let parsed = serde_json::to_value(store.snapshot()).unwrap();

        assert_eq!(parsed["emptyState"], "noNotes");
        assert_eq!(parsed["mode"]["mode"], "creating");
        assert_eq!(parsed["notes"], serde_json::json!([]));
    }
}

//! Form mode: creating a new note or editing an existing one.

use serde::{Deserialize, Serialize};

use super::NoteId;

/// Which operation the shared draft is staged for
///
/// Exactly one mode is active at any time. `NoteStore` starts in
/// `Creating`; `start_edit` moves to `Editing`, and `cancel_edit`, a
/// successful `update`, or deleting the edited note move back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "id", rename_all = "camelCase")]
pub enum EditMode {
    #[default]
    Creating,
    Editing(NoteId),
}

impl EditMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditMode::Editing(_))
    }

    /// The note being edited, if any
    pub fn target(&self) -> Option<NoteId> {
        match self {
            EditMode::Creating => None,
            EditMode::Editing(id) => Some(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_creating() {
        let mode = EditMode::default();
        assert!(!mode.is_editing());
        assert_eq!(mode.target(), None);
    }

    #[test]
    fn test_editing_target() {
        let mode = EditMode::Editing(NoteId::new(3));
        assert!(mode.is_editing());
        assert_eq!(mode.target(), Some(NoteId::new(3)));
    }

    #[test]
    fn test_serialization_contract() {
        let creating = serde_json::to_value(EditMode::Creating).unwrap();
        assert_eq!(creating, serde_json::json!({ "mode": "creating" }));

        let editing = serde_json::to_value(EditMode::Editing(NoteId::new(5))).unwrap();
        assert_eq!(editing, serde_json::json!({ "mode": "editing", "id": 5 }));
    }
}

//! Single-choice persona selection.

use serde::{Deserialize, Serialize};

use super::model::PersonaId;

/// Radio-style selection: at most one persona is chosen at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaSelection {
    selected: Option<PersonaId>,
}

impl PersonaSelection {
    /// Selects `id`, replacing any previous choice.
    ///
    /// Returns the persona that was deselected, if it differs from `id`.
    pub fn select(&mut self, id: PersonaId) -> Option<PersonaId> {
        self.selected.replace(id).filter(|previous| *previous != id)
    }

    pub fn selected(&self) -> Option<PersonaId> {
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

//! Genre pick step.

use bcs_model::{BookDraft, Genre};
use bcs_validate::validate_genre;

/// Local state of the genre screen: at most one genre highlighted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreStep {
    pub selected: Option<Genre>,
}

impl GenreStep {
    /// Seed the selection from the draft, keeping a previous pick when the
    /// user navigates back to this step.
    pub fn seeded(draft: &BookDraft) -> Self {
        Self {
            selected: draft.genre.clone(),
        }
    }

    pub fn select(&mut self, genre: Genre) {
        self.selected = Some(genre);
    }

    /// Validate-then-advance. Returns the confirmed genre, or `None` when
    /// nothing valid is selected (the step simply does not advance).
    pub fn confirm(&self) -> Option<Genre> {
        let genre = self.selected.clone()?;
        validate_genre(Some(&genre)).is_valid().then_some(genre)
    }
}

//! Subgenre pick step.
//!
//! The user either selects one of the genre's standard subgenres or
//! toggles the "add new" option; doing one clears the other. Advancing
//! requires exactly one of the two to hold.

use bcs_model::{BookDraft, Subgenre, SubgenreSelection};
use bcs_validate::validate_subgenre;

/// Local state of the subgenre screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubgenreStep {
    pub selected: Option<Subgenre>,
    pub add_new: bool,
}

impl SubgenreStep {
    /// Seed from the draft and the current selection, keeping whichever of
    /// the two choices the user made before navigating away.
    pub fn seeded(draft: &BookDraft, selection: &SubgenreSelection) -> Self {
        Self {
            // Only standard subgenres re-seed the pick; a user-defined one
            // belongs to the add-new branch.
            selected: draft.subgenre.clone().filter(|s| s.id.is_some()),
            add_new: selection.wants_new(),
        }
    }

    /// Select a standard subgenre, clearing the add-new flag.
    pub fn choose(&mut self, subgenre: Subgenre) {
        self.add_new = false;
        self.selected = Some(subgenre);
    }

    /// Toggle the add-new option, clearing any selected subgenre.
    pub fn request_new(&mut self) {
        self.add_new = true;
        self.selected = None;
    }

    /// Validate-then-advance.
    ///
    /// The step proceeds iff exactly one of {a structurally valid existing
    /// subgenre is selected, the add-new flag is set} holds; with zero or
    /// both, it stays put.
    pub fn confirm(&self) -> Option<SubgenreSelection> {
        let existing_ok = validate_subgenre(self.selected.as_ref()).is_valid();
        if existing_ok == self.add_new {
            return None;
        }
        if self.add_new {
            Some(SubgenreSelection::NewRequested)
        } else {
            self.selected.clone().map(SubgenreSelection::Existing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noir() -> Subgenre {
        Subgenre {
            id: Some(3),
            name: "Noir".to_string(),
            is_description_required: None,
        }
    }

    #[test]
    fn a_valid_pick_advances() {
        let mut step = SubgenreStep::default();
        step.choose(noir());
        assert_eq!(
            step.confirm(),
            Some(SubgenreSelection::Existing(noir()))
        );
    }

    #[test]
    fn nothing_chosen_blocks() {
        assert!(SubgenreStep::default().confirm().is_none());
    }

    #[test]
    fn add_new_alone_advances() {
        let mut step = SubgenreStep::default();
        step.request_new();
        assert_eq!(step.confirm(), Some(SubgenreSelection::NewRequested));
    }

    #[test]
    fn choosing_clears_add_new_and_back() {
        let mut step = SubgenreStep::default();
        step.request_new();
        step.choose(noir());
        assert!(!step.add_new);
        step.request_new();
        assert!(step.selected.is_none());
    }
}

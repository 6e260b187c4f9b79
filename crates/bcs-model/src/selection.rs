//! The subgenre choice made on the second wizard step.

use serde::{Deserialize, Serialize};

use crate::catalog::{NewSubgenre, Subgenre};

/// What the user has decided about the book's subgenre.
///
/// Picking a standard subgenre and asking to define a new one are mutually
/// exclusive by construction: the variant holds exactly one of the two.
/// `NewRequested` means the user opted in to defining a subgenre but has not
/// named it yet; `NewDefined` carries the finished definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum SubgenreSelection {
    /// Nothing chosen yet.
    #[default]
    Unset,
    /// One of the current genre's standard subgenres.
    Existing(Subgenre),
    /// The "add new" option, before the name has been entered.
    NewRequested,
    /// A finished user-defined subgenre.
    NewDefined(NewSubgenre),
}

impl SubgenreSelection {
    /// Whether the user opted to define a new subgenre (named or not).
    pub fn wants_new(&self) -> bool {
        matches!(self, Self::NewRequested | Self::NewDefined(_))
    }

    /// The subgenre record to merge into the draft, if one is settled.
    pub fn subgenre(&self) -> Option<Subgenre> {
        match self {
            Self::Existing(subgenre) => Some(subgenre.clone()),
            Self::NewDefined(new) => Some(new.clone().into()),
            Self::Unset | Self::NewRequested => None,
        }
    }

    /// Whether the settled subgenre requires a book description.
    pub fn requires_description(&self) -> bool {
        match self {
            Self::Existing(subgenre) => subgenre.requires_description(),
            Self::NewDefined(new) => new.is_description_required,
            Self::Unset | Self::NewRequested => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_requested_has_no_settled_subgenre() {
        assert!(SubgenreSelection::NewRequested.subgenre().is_none());
        assert!(SubgenreSelection::NewRequested.wants_new());
    }

    #[test]
    fn defined_subgenre_resolves_without_id() {
        let selection = SubgenreSelection::NewDefined(NewSubgenre {
            name: "Hopepunk".to_string(),
            is_description_required: true,
        });
        let subgenre = selection.subgenre().unwrap();
        assert_eq!(subgenre.id, None);
        assert!(selection.requires_description());
    }
}

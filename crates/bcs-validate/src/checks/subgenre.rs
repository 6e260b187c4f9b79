//! Subgenre pick rules: a standard subgenre needs its service id and name.

use bcs_model::{Subgenre, fields};

use crate::issue::Issue;

/// Check a standard subgenre selection. Stops at the first failure.
///
/// A user-defined subgenre never passes here (it has no id); the
/// add-new path is validated on its own step.
pub fn check(selected: Option<&Subgenre>) -> Vec<Issue> {
    let Some(subgenre) = selected else {
        return vec![Issue::Required {
            field: fields::SUBGENRE.to_string(),
        }];
    };

    if subgenre.id.is_none() {
        return vec![Issue::Required {
            field: fields::SUBGENRE.to_string(),
        }];
    }

    if subgenre.name.trim().is_empty() {
        return vec![Issue::Empty {
            field: fields::SUBGENRE.to_string(),
        }];
    }

    Vec::new()
}

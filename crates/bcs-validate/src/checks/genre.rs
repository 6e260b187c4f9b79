//! Genre pick rules: a genre must be selected and carry a name.

use bcs_model::{Genre, fields};

use crate::issue::Issue;

/// Check the genre selection. Stops at the first failure.
pub fn check(selected: Option<&Genre>) -> Vec<Issue> {
    let Some(genre) = selected else {
        return vec![Issue::Required {
            field: fields::GENRE.to_string(),
        }];
    };

    if genre.name.trim().is_empty() {
        return vec![Issue::Empty {
            field: fields::GENRE.to_string(),
        }];
    }

    Vec::new()
}

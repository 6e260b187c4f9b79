//! Add-new-subgenre rules: the name is required, the description flag is a
//! plain bool and always present.

use bcs_model::fields;

use crate::issue::Issue;

/// Check the user-entered subgenre name.
pub fn check(name: &str) -> Vec<Issue> {
    if name.trim().is_empty() {
        return vec![Issue::Empty {
            field: fields::NAME.to_string(),
        }];
    }
    Vec::new()
}

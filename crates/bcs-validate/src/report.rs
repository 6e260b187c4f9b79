//! Ordered collection of validation issues for one submission attempt.

use serde::{Deserialize, Serialize};

use crate::issue::Issue;

/// The result of validating one record against its rule set.
///
/// Issues keep the order in which the fields were checked so inline
/// rendering is stable across attempts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// The issue for a field path, if any - the lookup the inline error
    /// slot under each input uses.
    pub fn for_field(&self, field: &str) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.field() == field)
    }
}

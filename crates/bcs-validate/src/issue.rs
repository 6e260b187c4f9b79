//! Validation issue types.
//!
//! Each variant carries only its needed data and is keyed by the field path
//! it concerns. Message text lives in one place here, decoupled from the
//! check functions that raise the issues.

use serde::{Deserialize, Serialize};

use bcs_model::fields;

/// A single field validation failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Issue {
    /// A required field has no value at all.
    Required { field: String },
    /// A required text field is present but empty.
    Empty { field: String },
    /// A numeric field does not parse as a number.
    NotNumeric { field: String },
    /// A numeric field is below its minimum.
    BelowMinimum { field: String, min: u32 },
    /// A date field does not parse as a calendar date.
    InvalidDate { field: String },
}

impl Issue {
    /// Field path this issue is keyed by.
    pub fn field(&self) -> &str {
        match self {
            Issue::Required { field }
            | Issue::Empty { field }
            | Issue::NotNumeric { field }
            | Issue::BelowMinimum { field, .. }
            | Issue::InvalidDate { field } => field,
        }
    }

    /// Human-readable message for inline display.
    pub fn message(&self) -> String {
        let label = fields::label(self.field());
        match self {
            Issue::Required { .. } => format!("{label} is required field"),
            Issue::Empty { .. } if self.field() == fields::NAME => {
                format!("{label} cannot be an empty field")
            }
            Issue::Empty { .. } => format!("{label} should not be empty"),
            Issue::NotNumeric { .. } => format!("{label} should be a type 'integer'"),
            Issue::BelowMinimum { min, .. } => {
                format!("{label} should be greater than {min}")
            }
            Issue::InvalidDate { .. } => format!("{label} should be a type of date"),
        }
    }
}

//! Field validation for book intake.
//!
//! Each wizard step has a declarative rule set over its slice of the book
//! record. Checks return field-keyed [`Issue`]s; message text is resolved
//! in one place from (issue kind, field label), so the wording is decoupled
//! from the check mechanics.
//!
//! The pick steps stop at the first failure; the information step collects
//! every failing field at once:
//!
//! ```
//! use bcs_model::InformationForm;
//! use bcs_validate::validate_information;
//!
//! let err = validate_information(&InformationForm::default(), false).unwrap_err();
//! assert!(err.issues.len() >= 3);
//! ```

mod checks;
mod issue;
mod report;

use bcs_model::{BookInformation, Genre, InformationForm, Subgenre};

pub use issue::Issue;
pub use report::ValidationReport;

/// Validate the genre selection (step 1).
pub fn validate_genre(selected: Option<&Genre>) -> ValidationReport {
    ValidationReport::new(checks::genre::check(selected))
}

/// Validate a standard subgenre selection (step 2, pick branch).
pub fn validate_subgenre(selected: Option<&Subgenre>) -> ValidationReport {
    ValidationReport::new(checks::subgenre::check(selected))
}

/// Validate the user-entered subgenre name (add-new step).
pub fn validate_new_subgenre(name: &str) -> ValidationReport {
    ValidationReport::new(checks::new_subgenre::check(name))
}

/// Validate the information form (final step), collecting all failures.
///
/// On success the raw form values are parsed into a typed
/// [`BookInformation`] record.
pub fn validate_information(
    form: &InformationForm,
    description_required: bool,
) -> Result<BookInformation, ValidationReport> {
    checks::information::check(form, description_required).map_err(ValidationReport::new)
}

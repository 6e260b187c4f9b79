//! Information form step.

use bcs_model::{BookDraft, BookInformation, InformationForm};
use bcs_validate::{Issue, ValidationReport, validate_information};

/// Local state of the information screen: the raw form plus the issues
/// from the last failed attempt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InformationStep {
    pub form: InformationForm,
    pub errors: ValidationReport,
}

impl InformationStep {
    /// Seed the form from an already-confirmed record when navigating back.
    pub fn seeded(draft: &BookDraft) -> Self {
        Self {
            form: draft
                .information
                .as_ref()
                .map(InformationForm::from)
                .unwrap_or_default(),
            errors: ValidationReport::default(),
        }
    }

    /// Validate-then-advance, collecting every failing field.
    ///
    /// `description_required` comes from the subgenre chosen upstream.
    pub fn confirm(&mut self, description_required: bool) -> Option<BookInformation> {
        match validate_information(&self.form, description_required) {
            Ok(information) => {
                self.errors = ValidationReport::default();
                Some(information)
            }
            Err(report) => {
                self.errors = report;
                None
            }
        }
    }

    /// Inline message for a field, if its last validation failed.
    pub fn error_message(&self, field: &str) -> Option<String> {
        self.errors.for_field(field).map(Issue::message)
    }
}

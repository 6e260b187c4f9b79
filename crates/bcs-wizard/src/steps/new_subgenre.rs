//! Add-new-subgenre step.

use bcs_model::{NewSubgenre, SubgenreSelection};
use bcs_validate::{ValidationReport, validate_new_subgenre};

/// Local state of the add-new-subgenre screen: a free-text name and the
/// description-required checkbox.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSubgenreStep {
    pub name: String,
    pub description_required: bool,
    pub errors: ValidationReport,
}

impl NewSubgenreStep {
    /// Seed from an already-defined subgenre when navigating back.
    pub fn seeded(selection: &SubgenreSelection) -> Self {
        match selection {
            SubgenreSelection::NewDefined(new) => Self {
                name: new.name.clone(),
                description_required: new.is_description_required,
                errors: ValidationReport::default(),
            },
            _ => Self::default(),
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn set_description_required(&mut self, required: bool) {
        self.description_required = required;
    }

    /// Validate-then-advance. On failure the issues stay on the step for
    /// inline display.
    pub fn confirm(&mut self) -> Option<NewSubgenre> {
        let report = validate_new_subgenre(&self.name);
        if report.is_valid() {
            self.errors = ValidationReport::default();
            Some(NewSubgenre {
                name: self.name.clone(),
                is_description_required: self.description_required,
            })
        } else {
            self.errors = report;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcs_model::fields;

    #[test]
    fn empty_name_records_the_error() {
        let mut step = NewSubgenreStep::default();
        assert!(step.confirm().is_none());
        assert!(step.errors.for_field(fields::NAME).is_some());
    }

    #[test]
    fn confirmation_clears_stale_errors() {
        let mut step = NewSubgenreStep::default();
        let _ = step.confirm();
        step.set_name("Hopepunk".to_string());
        step.set_description_required(true);
        let new = step.confirm().expect("valid name");
        assert!(new.is_description_required);
        assert!(step.errors.is_valid());
    }
}

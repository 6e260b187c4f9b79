//! Behavior tests for the per-step rule sets.

use bcs_model::{InformationForm, Subgenre, fields};
use bcs_validate::{validate_information, validate_new_subgenre, validate_subgenre};

fn filled_form() -> InformationForm {
    InformationForm {
        title: "The Sound and the Fury".to_string(),
        author: "William Faulkner".to_string(),
        publisher: "Jonathan Cape".to_string(),
        isbn: "978-0679732242".to_string(),
        date: "1929-10-07".to_string(),
        num_of_pages: "326".to_string(),
        format: "format 2".to_string(),
        desc: String::new(),
        edition: "First".to_string(),
        edition_lang: "format 1".to_string(),
    }
}

#[test]
fn information_collects_all_failing_fields_at_once() {
    let mut form = filled_form();
    form.title = String::new();
    form.num_of_pages = "0".to_string();
    form.date = String::new();

    let report = validate_information(&form, false).unwrap_err();
    assert!(report.issues.len() >= 3, "got {:?}", report.issues);
    assert!(report.for_field(fields::TITLE).is_some());
    assert!(report.for_field(fields::NUM_OF_PAGES).is_some());
    assert!(report.for_field(fields::DATE).is_some());
}

#[test]
fn description_is_required_only_when_the_subgenre_says_so() {
    let form = filled_form();

    // Empty description passes when the flag is off.
    assert!(validate_information(&form, false).is_ok());

    // The same form fails with the flag on, keyed to the desc field.
    let report = validate_information(&form, true).unwrap_err();
    assert_eq!(report.issues.len(), 1);
    let issue = report.for_field(fields::DESC).expect("desc issue");
    assert_eq!(issue.message(), "Description should not be empty");

    // A populated description satisfies the flag.
    let mut described = filled_form();
    described.desc = "A Compson family chronicle.".to_string();
    assert!(validate_information(&described, true).is_ok());
}

#[test]
fn information_issues_keep_field_order() {
    let report = validate_information(&InformationForm::default(), false).unwrap_err();
    let order: Vec<&str> = report.issues.iter().map(|issue| issue.field()).collect();
    assert_eq!(
        order,
        vec![
            fields::TITLE,
            fields::AUTHOR,
            fields::PUBLISHER,
            fields::ISBN,
            fields::DATE,
            fields::NUM_OF_PAGES,
            fields::FORMAT,
            fields::EDITION,
            fields::EDITION_LANG,
        ]
    );
}

#[test]
fn date_must_be_a_calendar_date() {
    let mut form = filled_form();
    form.date = "1929-02-30".to_string();
    let report = validate_information(&form, false).unwrap_err();
    assert_eq!(
        report.for_field(fields::DATE).unwrap().message(),
        "Date should be a type of date"
    );
}

#[test]
fn subgenre_pick_short_circuits_on_first_failure() {
    let nameless = Subgenre {
        id: None,
        name: String::new(),
        is_description_required: None,
    };
    // Both the missing id and the empty name are wrong; only one issue is
    // reported.
    assert_eq!(validate_subgenre(Some(&nameless)).issues.len(), 1);
}

#[test]
fn new_subgenre_name_is_the_only_rule() {
    assert!(validate_new_subgenre("Noir revival").is_valid());
    let report = validate_new_subgenre("");
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].field(), fields::NAME);
}

//! Orchestrator reducer behavior across whole wizard runs.

use bcs_model::{
    Genre, InformationForm, Subgenre, SubgenreSelection, SubmissionOutcome,
};
use bcs_wizard::{
    CatalogState, FlowKind, GenreStep, InformationStep, NewSubgenreStep, StepKind, SubgenreStep,
    SubmissionState, WizardAction, WizardState,
};

fn fiction() -> Genre {
    Genre {
        id: 1,
        name: "Fiction".to_string(),
        subgenres: vec![
            Subgenre {
                id: Some(3),
                name: "Noir".to_string(),
                is_description_required: None,
            },
            Subgenre {
                id: Some(4),
                name: "Historical".to_string(),
                is_description_required: Some(true),
            },
        ],
    }
}

fn filled_form() -> InformationForm {
    InformationForm {
        title: "Persuasion".to_string(),
        author: "Jane Austen".to_string(),
        publisher: "John Murray".to_string(),
        isbn: "978-1503290310".to_string(),
        date: "1817-12-20".to_string(),
        num_of_pages: "249".to_string(),
        format: "format 1".to_string(),
        desc: String::new(),
        edition: "First".to_string(),
        edition_lang: "format 1".to_string(),
    }
}

/// Drive the reducer through the standard three-step flow.
fn confirmed_standard_run() -> WizardState {
    let state = WizardState::default()
        .apply(WizardAction::GenresLoaded(Ok(vec![fiction()])));

    let mut genre_step = GenreStep::seeded(&state.draft);
    genre_step.select(fiction());
    let state = state.apply(WizardAction::GenreConfirmed(
        genre_step.confirm().expect("genre picked"),
    ));

    let mut subgenre_step = SubgenreStep::seeded(&state.draft, &state.selection);
    subgenre_step.choose(fiction().subgenres[0].clone());
    let state = state.apply(WizardAction::SubgenreChosen(
        subgenre_step.confirm().expect("subgenre picked"),
    ));

    let mut information_step = InformationStep::seeded(&state.draft);
    information_step.form = filled_form();
    let information = information_step
        .confirm(state.description_required())
        .expect("form valid");
    state.apply(WizardAction::InformationConfirmed(information))
}

#[test]
fn standard_run_reaches_submission_with_a_complete_book() {
    let state = confirmed_standard_run();
    assert_eq!(state.flow().kind(), FlowKind::Standard);
    assert_eq!(state.step, 3);
    assert_eq!(state.submission, SubmissionState::InFlight);
    let book = state.draft.complete().expect("all slices populated");
    assert_eq!(book.subgenre.name, "Noir");
}

#[test]
fn custom_run_synthesizes_a_subgenre_without_id() {
    let state = WizardState::default()
        .apply(WizardAction::GenreConfirmed(fiction()));

    let mut subgenre_step = SubgenreStep::seeded(&state.draft, &state.selection);
    subgenre_step.request_new();
    let state = state.apply(WizardAction::SubgenreChosen(
        subgenre_step.confirm().expect("add-new chosen"),
    ));

    // Asking for a new subgenre switches to the four-step flow and lands on
    // the define screen.
    assert_eq!(state.flow().kind(), FlowKind::Custom);
    assert_eq!(state.current_step(), Some(StepKind::NewSubgenre));
    assert!(state.draft.subgenre.is_none());

    let mut new_step = NewSubgenreStep::seeded(&state.selection);
    new_step.set_name("Hopepunk".to_string());
    new_step.set_description_required(true);
    let state = state.apply(WizardAction::NewSubgenreDefined(
        new_step.confirm().expect("name entered"),
    ));

    assert_eq!(state.current_step(), Some(StepKind::Information));
    let subgenre = state.draft.subgenre.as_ref().expect("subgenre merged");
    assert_eq!(subgenre.id, None);
    assert!(state.description_required());
}

#[test]
fn subgenre_confirm_is_an_exclusive_or() {
    // Valid pick, add-new unset: advances.
    let mut step = SubgenreStep::default();
    step.choose(Subgenre {
        id: Some(3),
        name: "Noir".to_string(),
        is_description_required: None,
    });
    assert!(step.confirm().is_some());

    // Nothing selected, add-new unset: blocked.
    assert!(SubgenreStep::default().confirm().is_none());

    // Add-new set, nothing selected: advances.
    let mut step = SubgenreStep::default();
    step.request_new();
    assert!(step.confirm().is_some());
}

#[test]
fn accepted_submission_finishes_the_wizard() {
    let state = confirmed_standard_run()
        .apply(WizardAction::SubmissionResolved(SubmissionOutcome::Accepted));
    assert!(state.finished);
    assert_eq!(state.submission, SubmissionState::Accepted);
}

#[test]
fn rejected_submission_stays_on_the_information_step() {
    let state = confirmed_standard_run().apply(WizardAction::SubmissionResolved(
        SubmissionOutcome::Rejected { status: 500 },
    ));
    assert!(!state.finished);
    assert_eq!(state.submission, SubmissionState::Rejected { status: 500 });
    assert_eq!(state.current_step(), Some(StepKind::Information));
}

#[test]
fn transport_failure_is_distinguishable_from_rejection() {
    let state = confirmed_standard_run().apply(WizardAction::SubmissionResolved(
        SubmissionOutcome::TransportError,
    ));
    assert!(!state.finished);
    assert_eq!(state.submission, SubmissionState::TransportError);
}

#[test]
fn restart_returns_to_the_init_flow_but_keeps_the_catalog() {
    let finished = confirmed_standard_run()
        .apply(WizardAction::SubmissionResolved(SubmissionOutcome::Accepted));
    let state = finished.apply(WizardAction::Restart);

    assert_eq!(state.step, 1);
    assert!(!state.finished);
    assert_eq!(state.selection, SubgenreSelection::Unset);
    assert_eq!(state.submission, SubmissionState::Idle);
    assert!(state.draft.genre.is_none());
    assert!(state.draft.subgenre.is_none());
    assert_eq!(state.flow().kind(), FlowKind::Init);
    // The catalog was fetched once at startup and survives the restart.
    assert_eq!(state.catalog, CatalogState::Loaded(vec![fiction()]));
}

#[test]
fn back_navigation_keeps_confirmed_data_for_reseeding() {
    let state = confirmed_standard_run().apply(WizardAction::Back);
    assert_eq!(state.current_step(), Some(StepKind::Subgenre));

    let step = SubgenreStep::seeded(&state.draft, &state.selection);
    assert_eq!(
        step.selected.as_ref().map(|s| s.name.as_str()),
        Some("Noir")
    );
    assert!(!step.add_new);
}

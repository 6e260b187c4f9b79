//! Flow resolver behavior.

use proptest::prelude::{Just, Strategy, prop_oneof, proptest};

use bcs_model::{NewSubgenre, Subgenre, SubgenreSelection};
use bcs_wizard::{FlowKind, StepKind, resolve_flow};

fn noir() -> Subgenre {
    Subgenre {
        id: Some(3),
        name: "Noir".to_string(),
        is_description_required: None,
    }
}

#[test]
fn no_selection_resolves_the_init_flow() {
    let flow = resolve_flow(&SubgenreSelection::Unset);
    assert_eq!(flow.kind(), FlowKind::Init);
    assert_eq!(
        flow.steps(),
        &[StepKind::Genre, StepKind::Subgenre, StepKind::Placeholder]
    );
}

#[test]
fn add_new_resolves_the_custom_flow_named_or_not() {
    for selection in [
        SubgenreSelection::NewRequested,
        SubgenreSelection::NewDefined(NewSubgenre {
            name: "Hopepunk".to_string(),
            is_description_required: false,
        }),
    ] {
        let flow = resolve_flow(&selection);
        assert_eq!(flow.kind(), FlowKind::Custom);
        assert_eq!(
            flow.steps(),
            &[
                StepKind::Genre,
                StepKind::Subgenre,
                StepKind::NewSubgenre,
                StepKind::Information
            ]
        );
    }
}

#[test]
fn an_existing_pick_resolves_the_standard_flow() {
    let flow = resolve_flow(&SubgenreSelection::Existing(noir()));
    assert_eq!(flow.kind(), FlowKind::Standard);
    assert_eq!(
        flow.steps(),
        &[StepKind::Genre, StepKind::Subgenre, StepKind::Information]
    );
}

fn any_selection() -> impl Strategy<Value = SubgenreSelection> {
    prop_oneof![
        Just(SubgenreSelection::Unset),
        Just(SubgenreSelection::NewRequested),
        ("[a-zA-Z ]{1,24}", proptest::option::of(0u64..500)).prop_map(|(name, id)| {
            SubgenreSelection::Existing(Subgenre {
                id,
                name,
                is_description_required: None,
            })
        }),
        ("[a-zA-Z ]{1,24}", proptest::bool::ANY).prop_map(|(name, flag)| {
            SubgenreSelection::NewDefined(NewSubgenre {
                name,
                is_description_required: flag,
            })
        }),
    ]
}

proptest! {
    /// Same selection in, same flow out - the resolver is a pure function.
    #[test]
    fn resolution_is_deterministic(selection in any_selection()) {
        let first = resolve_flow(&selection);
        let second = resolve_flow(&selection);
        assert_eq!(first, second);
    }

    /// Every reachable flow starts with the genre and subgenre steps and
    /// is one of the three known shapes.
    #[test]
    fn only_three_flow_shapes_exist(selection in any_selection()) {
        let flow = resolve_flow(&selection);
        let steps = flow.steps();
        assert_eq!(steps[0], StepKind::Genre);
        assert_eq!(steps[1], StepKind::Subgenre);
        assert!(matches!(steps.len(), 3 | 4));
    }
}

//! Flow resolution.
//!
//! The active flow is a pure function of the subgenre selection alone,
//! recomputed on every render and never cached. Exactly three shapes
//! exist:
//!
//! - **init**: genre, subgenre, plus an inert placeholder slot that keeps
//!   the step-count indicator stable while later steps are undetermined;
//! - **standard**: genre, subgenre, information;
//! - **custom**: genre, subgenre, add-new-subgenre, information.

use serde::{Deserialize, Serialize};

use bcs_model::SubgenreSelection;

/// One screen of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    Genre,
    Subgenre,
    NewSubgenre,
    Information,
    /// Inert slot shown as "…" in the indicator; never rendered as a screen.
    Placeholder,
}

impl StepKind {
    /// Indicator label under the step counter.
    pub fn label(&self) -> &'static str {
        match self {
            StepKind::Genre => "Genre",
            StepKind::Subgenre => "Subgenre",
            StepKind::NewSubgenre => "Add new subgenre",
            StepKind::Information => "Information",
            StepKind::Placeholder => "",
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, StepKind::Placeholder)
    }
}

/// Which of the three flow shapes is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowKind {
    Init,
    Standard,
    Custom,
}

/// The ordered list of steps for the current selections.
///
/// Ephemeral: recomputed from state on every use, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flow {
    kind: FlowKind,
}

const INIT_STEPS: &[StepKind] = &[StepKind::Genre, StepKind::Subgenre, StepKind::Placeholder];

const STANDARD_STEPS: &[StepKind] = &[
    StepKind::Genre,
    StepKind::Subgenre,
    StepKind::Information,
];

const CUSTOM_STEPS: &[StepKind] = &[
    StepKind::Genre,
    StepKind::Subgenre,
    StepKind::NewSubgenre,
    StepKind::Information,
];

impl Flow {
    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    /// The steps in display order, placeholder included.
    pub fn steps(&self) -> &'static [StepKind] {
        match self.kind {
            FlowKind::Init => INIT_STEPS,
            FlowKind::Standard => STANDARD_STEPS,
            FlowKind::Custom => CUSTOM_STEPS,
        }
    }

    /// Step at a 1-based index.
    pub fn step_at(&self, step: usize) -> Option<StepKind> {
        step.checked_sub(1).and_then(|i| self.steps().get(i)).copied()
    }
}

/// Resolve the active flow from the subgenre selection.
///
/// Deterministic and side-effect-free: same selection, same flow.
pub fn resolve_flow(selection: &SubgenreSelection) -> Flow {
    let kind = match selection {
        SubgenreSelection::Unset => FlowKind::Init,
        SubgenreSelection::NewRequested | SubgenreSelection::NewDefined(_) => FlowKind::Custom,
        SubgenreSelection::Existing(_) => FlowKind::Standard,
    };
    Flow { kind }
}

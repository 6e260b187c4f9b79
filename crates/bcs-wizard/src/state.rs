//! Wizard orchestrator state and its pure reducer.
//!
//! All transitions go through [`WizardState::apply`], which returns a new
//! state value and never mutates in place. This keeps the orchestrator
//! deterministic and unit-testable without rendering any UI.

use serde::{Deserialize, Serialize};

use bcs_model::{
    BookDraft, BookInformation, Genre, NewSubgenre, SubgenreSelection, SubmissionOutcome,
};

use crate::flow::{Flow, StepKind, resolve_flow};

/// Load state of the genre catalog fetched once at startup.
///
/// A failed or late fetch leaves an explicit `Failed` state rather than a
/// silently empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CatalogState {
    #[default]
    Loading,
    Loaded(Vec<Genre>),
    Failed,
}

impl CatalogState {
    /// The genres to offer, empty while loading or after a failure.
    pub fn genres(&self) -> &[Genre] {
        match self {
            CatalogState::Loaded(genres) => genres,
            CatalogState::Loading | CatalogState::Failed => &[],
        }
    }
}

/// Where the book submission stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A request is out; the GUI disables the Add button while set.
    InFlight,
    Accepted,
    Rejected {
        status: u16,
    },
    TransportError,
}

impl From<SubmissionOutcome> for SubmissionState {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Accepted => SubmissionState::Accepted,
            SubmissionOutcome::Rejected { status } => SubmissionState::Rejected { status },
            SubmissionOutcome::TransportError => SubmissionState::TransportError,
        }
    }
}

/// Everything the wizard orchestrator owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub catalog: CatalogState,
    pub draft: BookDraft,
    pub selection: SubgenreSelection,
    /// Current 1-based step index into the resolved flow.
    pub step: usize,
    pub submission: SubmissionState,
    pub finished: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            catalog: CatalogState::default(),
            draft: BookDraft::default(),
            selection: SubgenreSelection::default(),
            step: 1,
            submission: SubmissionState::default(),
            finished: false,
        }
    }
}

/// A discrete state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardAction {
    /// The catalog fetch resolved.
    GenresLoaded(Result<Vec<Genre>, String>),
    /// Step 1 confirmed a genre.
    GenreConfirmed(Genre),
    /// Step 2 settled the subgenre question (existing pick or add-new).
    SubgenreChosen(SubgenreSelection),
    /// The add-new step defined the subgenre.
    NewSubgenreDefined(NewSubgenre),
    /// The information step validated; submission follows.
    InformationConfirmed(BookInformation),
    /// The creation service answered (or the request failed).
    SubmissionResolved(SubmissionOutcome),
    /// Step back without validation.
    Back,
    /// Reset everything and return to step 1.
    Restart,
}

impl WizardState {
    /// The flow for the current selection; recomputed, never cached.
    pub fn flow(&self) -> Flow {
        resolve_flow(&self.selection)
    }

    /// The step the wizard is on, if the index points at a real screen.
    pub fn current_step(&self) -> Option<StepKind> {
        self.flow().step_at(self.step)
    }

    /// Whether the chosen subgenre demands a description on the final step.
    pub fn description_required(&self) -> bool {
        self.selection.requires_description()
    }

    /// Apply one action, producing the next state.
    pub fn apply(&self, action: WizardAction) -> WizardState {
        let mut next = self.clone();
        match action {
            WizardAction::GenresLoaded(Ok(genres)) => {
                tracing::debug!(count = genres.len(), "genre catalog loaded");
                next.catalog = CatalogState::Loaded(genres);
            }
            WizardAction::GenresLoaded(Err(reason)) => {
                tracing::warn!(%reason, "genre catalog fetch failed");
                next.catalog = CatalogState::Failed;
            }
            WizardAction::GenreConfirmed(genre) => {
                next.draft = self.draft.with_genre(genre);
                next.step = self.step + 1;
            }
            WizardAction::SubgenreChosen(selection) => {
                next.draft = self.draft.with_subgenre(selection.subgenre());
                next.selection = selection;
                next.step = self.step + 1;
            }
            WizardAction::NewSubgenreDefined(new) => {
                next.draft = self.draft.with_subgenre(Some(new.clone().into()));
                next.selection = SubgenreSelection::NewDefined(new);
                next.step = self.step + 1;
            }
            WizardAction::InformationConfirmed(information) => {
                next.draft = self.draft.with_information(information);
                next.submission = SubmissionState::InFlight;
            }
            WizardAction::SubmissionResolved(outcome) => {
                tracing::debug!(?outcome, "submission resolved");
                next.submission = outcome.into();
                if outcome.is_accepted() {
                    next.finished = true;
                }
                // Anything but 201 leaves the wizard where it is.
            }
            WizardAction::Back => {
                next.step = self.step.saturating_sub(1).max(1);
            }
            WizardAction::Restart => {
                next = WizardState {
                    catalog: self.catalog.clone(),
                    ..WizardState::default()
                };
            }
        }
        next
    }
}

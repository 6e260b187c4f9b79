//! Wizard core for book intake: flow resolution, per-step state machines,
//! and the orchestrator reducer.
//!
//! The GUI layers on top of this crate; everything here is pure and
//! synchronous so the branching logic can be tested without rendering.
//!
//! ```
//! use bcs_model::SubgenreSelection;
//! use bcs_wizard::{FlowKind, resolve_flow};
//!
//! let flow = resolve_flow(&SubgenreSelection::NewRequested);
//! assert_eq!(flow.kind(), FlowKind::Custom);
//! assert_eq!(flow.steps().len(), 4);
//! ```

mod flow;
mod state;
mod steps;

pub use flow::{Flow, FlowKind, StepKind, resolve_flow};
pub use state::{CatalogState, SubmissionState, WizardAction, WizardState};
pub use steps::{GenreStep, InformationStep, NewSubgenreStep, SubgenreStep};

//! Application state.
//!
//! The orchestrator state lives in `bcs-wizard` and only changes through
//! its reducer; the per-step form states here hold what the user is
//! currently typing or highlighting on each screen.

use bcs_client::LibraryClient;
use bcs_wizard::{GenreStep, InformationStep, NewSubgenreStep, SubgenreStep, WizardState};

use crate::settings::Settings;

/// Everything the application owns.
pub struct AppState {
    pub settings: Settings,
    /// `None` only if the HTTP client could not be constructed; the wizard
    /// then behaves as if both services were unreachable.
    pub client: Option<LibraryClient>,
    pub wizard: WizardState,
    pub genre_step: GenreStep,
    pub subgenre_step: SubgenreStep,
    pub new_subgenre_step: NewSubgenreStep,
    pub information_step: InformationStep,
}

impl AppState {
    pub fn new(settings: Settings, client: Option<LibraryClient>) -> Self {
        Self {
            settings,
            client,
            wizard: WizardState::default(),
            genre_step: GenreStep::default(),
            subgenre_step: SubgenreStep::default(),
            new_subgenre_step: NewSubgenreStep::default(),
            information_step: InformationStep::default(),
        }
    }

    /// Reset all step form states, reseeding from the (empty) draft.
    pub fn reset_steps(&mut self) {
        self.genre_step = GenreStep::seeded(&self.wizard.draft);
        self.subgenre_step = SubgenreStep::seeded(&self.wizard.draft, &self.wizard.selection);
        self.new_subgenre_step = NewSubgenreStep::seeded(&self.wizard.selection);
        self.information_step = InformationStep::seeded(&self.wizard.draft);
    }
}

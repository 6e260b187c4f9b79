//! Genre step handlers.

use iced::Task;

use bcs_wizard::{SubgenreStep, WizardAction};

use crate::app::App;
use crate::message::{GenreMessage, Message};

impl App {
    /// Handle genre screen messages.
    pub fn handle_genre_message(&mut self, msg: GenreMessage) -> Task<Message> {
        match msg {
            GenreMessage::Selected(genre) => {
                self.state.genre_step.select(genre);
            }
            GenreMessage::NextClicked => {
                // Invalid selection: stay put, the step shows no errors of
                // its own.
                if let Some(genre) = self.state.genre_step.confirm() {
                    self.state.wizard = self
                        .state
                        .wizard
                        .apply(WizardAction::GenreConfirmed(genre));
                    self.state.subgenre_step =
                        SubgenreStep::seeded(&self.state.wizard.draft, &self.state.wizard.selection);
                }
            }
        }
        Task::none()
    }
}

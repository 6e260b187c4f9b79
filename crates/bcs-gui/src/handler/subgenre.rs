//! Subgenre step handlers.

use iced::Task;

use bcs_wizard::{InformationStep, NewSubgenreStep, WizardAction};

use crate::app::App;
use crate::message::{Message, SubgenreMessage};

impl App {
    /// Handle subgenre screen messages.
    pub fn handle_subgenre_message(&mut self, msg: SubgenreMessage) -> Task<Message> {
        match msg {
            SubgenreMessage::Selected(subgenre) => {
                self.state.subgenre_step.choose(subgenre);
            }
            SubgenreMessage::AddNewClicked => {
                self.state.subgenre_step.request_new();
            }
            SubgenreMessage::NextClicked => {
                if let Some(selection) = self.state.subgenre_step.confirm() {
                    self.state.wizard = self
                        .state
                        .wizard
                        .apply(WizardAction::SubgenreChosen(selection));
                    // Whichever screen comes third, seed it from the new
                    // state so back-navigation keeps data.
                    self.state.new_subgenre_step =
                        NewSubgenreStep::seeded(&self.state.wizard.selection);
                    self.state.information_step =
                        InformationStep::seeded(&self.state.wizard.draft);
                }
            }
            SubgenreMessage::BackClicked => {
                self.state.wizard = self.state.wizard.apply(WizardAction::Back);
            }
        }
        Task::none()
    }
}

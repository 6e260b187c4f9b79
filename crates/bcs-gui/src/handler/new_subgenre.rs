//! Add-new-subgenre step handlers.

use iced::Task;

use bcs_wizard::{InformationStep, WizardAction};

use crate::app::App;
use crate::message::{Message, NewSubgenreMessage};

impl App {
    /// Handle add-new-subgenre screen messages.
    pub fn handle_new_subgenre_message(&mut self, msg: NewSubgenreMessage) -> Task<Message> {
        match msg {
            NewSubgenreMessage::NameChanged(name) => {
                self.state.new_subgenre_step.set_name(name);
            }
            NewSubgenreMessage::DescriptionRequiredToggled(required) => {
                self.state.new_subgenre_step.set_description_required(required);
            }
            NewSubgenreMessage::NextClicked => {
                if let Some(new) = self.state.new_subgenre_step.confirm() {
                    self.state.wizard = self
                        .state
                        .wizard
                        .apply(WizardAction::NewSubgenreDefined(new));
                    self.state.information_step =
                        InformationStep::seeded(&self.state.wizard.draft);
                }
            }
            NewSubgenreMessage::BackClicked => {
                self.state.wizard = self.state.wizard.apply(WizardAction::Back);
            }
        }
        Task::none()
    }
}

//! Information step handlers.

use iced::Task;

use bcs_model::SubmissionOutcome;
use bcs_wizard::{SubmissionState, WizardAction};

use crate::app::App;
use crate::message::{InformationMessage, Message};

impl App {
    /// Handle information screen messages.
    pub fn handle_information_message(&mut self, msg: InformationMessage) -> Task<Message> {
        let form = &mut self.state.information_step.form;
        match msg {
            InformationMessage::TitleChanged(value) => form.title = value,
            InformationMessage::AuthorPicked(value) => form.author = value,
            InformationMessage::IsbnChanged(value) => form.isbn = value,
            InformationMessage::PublisherPicked(value) => form.publisher = value,
            InformationMessage::DateChanged(value) => form.date = value,
            InformationMessage::NumOfPagesChanged(value) => form.num_of_pages = value,
            InformationMessage::FormatPicked(value) => form.format = value,
            InformationMessage::EditionChanged(value) => form.edition = value,
            InformationMessage::EditionLangPicked(value) => form.edition_lang = value,
            InformationMessage::DescChanged(value) => form.desc = value,
            InformationMessage::AddClicked => return self.submit_book(),
            InformationMessage::BackClicked => {
                self.state.wizard = self.state.wizard.apply(WizardAction::Back);
            }
        }
        Task::none()
    }

    /// Validate the form and, if it holds, send the finished book off.
    fn submit_book(&mut self) -> Task<Message> {
        if self.state.wizard.submission == SubmissionState::InFlight {
            return Task::none();
        }

        let description_required = self.state.wizard.description_required();
        let Some(information) = self.state.information_step.confirm(description_required) else {
            return Task::none();
        };

        self.state.wizard = self
            .state
            .wizard
            .apply(WizardAction::InformationConfirmed(information));

        let Some(book) = self.state.wizard.draft.complete() else {
            // Earlier steps were skipped somehow; treat like a request that
            // never left.
            tracing::error!("submission requested with an incomplete draft");
            return Task::done(Message::SubmissionFinished(SubmissionOutcome::TransportError));
        };

        match self.state.client.clone() {
            Some(client) => Task::perform(
                async move { client.create_book(&book).await },
                Message::SubmissionFinished,
            ),
            None => Task::done(Message::SubmissionFinished(SubmissionOutcome::TransportError)),
        }
    }
}

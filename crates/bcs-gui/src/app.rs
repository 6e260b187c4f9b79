//! Main application.
//!
//! Elm architecture: all state changes happen in `update()`, views are
//! pure functions of the state, and the two service calls run through
//! `Task::perform`.

use iced::widget::{Space, column, container, scrollable, text};
use iced::{Element, Length, Task, Theme};

use bcs_client::LibraryClient;
use bcs_wizard::{StepKind, WizardAction};

use crate::message::Message;
use crate::settings::Settings;
use crate::state::AppState;
use crate::theme::{GRAY_900, SPACING_LG, SPACING_MD, SPACING_XL};
use crate::view;

/// The application root.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create the application and kick off the one-time catalog fetch.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        let (client, startup) = match LibraryClient::new(settings.service_url.clone()) {
            Ok(client) => {
                let fetch_client = client.clone();
                let fetch = Task::perform(
                    async move {
                        fetch_client
                            .fetch_genres()
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::GenresFetched,
                );
                (Some(client), fetch)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to build the service client");
                let reason = err.to_string();
                (None, Task::done(Message::GenresFetched(Err(reason))))
            }
        };

        let app = Self {
            state: AppState::new(settings, client),
        };
        (app, startup)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GenresFetched(result) => {
                self.state.wizard = self.state.wizard.apply(WizardAction::GenresLoaded(result));
                Task::none()
            }

            Message::Genre(msg) => self.handle_genre_message(msg),
            Message::Subgenre(msg) => self.handle_subgenre_message(msg),
            Message::NewSubgenre(msg) => self.handle_new_subgenre_message(msg),
            Message::Information(msg) => self.handle_information_message(msg),

            Message::SubmissionFinished(outcome) => {
                self.state.wizard = self
                    .state
                    .wizard
                    .apply(WizardAction::SubmissionResolved(outcome));
                Task::none()
            }

            Message::RestartClicked => {
                self.state.wizard = self.state.wizard.apply(WizardAction::Restart);
                self.state.reset_steps();
                Task::none()
            }
        }
    }

    /// Render the current screen.
    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = if self.state.wizard.finished {
            view::view_success()
        } else {
            let flow = self.state.wizard.flow();
            let body: Element<'_, Message> = match self.state.wizard.current_step() {
                Some(StepKind::Genre) => view::view_genre(&self.state),
                Some(StepKind::Subgenre) => view::view_subgenre(&self.state),
                Some(StepKind::NewSubgenre) => view::view_new_subgenre(&self.state),
                Some(StepKind::Information) => view::view_information(&self.state),
                // The placeholder is never the current screen; an index
                // out of range renders nothing.
                Some(StepKind::Placeholder) | None => column![].into(),
            };

            column![
                text("Add book - New book").size(20).color(GRAY_900),
                Space::new().height(SPACING_MD),
                view::view_steps(flow, self.state.wizard.step),
                Space::new().height(SPACING_LG),
                body,
            ]
            .into()
        };

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(SPACING_XL)
            .into()
    }

    /// Window title.
    pub fn title(&self) -> String {
        "Book Catalog Studio".to_string()
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

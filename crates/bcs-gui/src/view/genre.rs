//! Genre pick screen.

use iced::widget::{Space, button, column, row, text};
use iced::{Element, Length};

use crate::message::{GenreMessage, Message};
use crate::state::AppState;
use crate::theme::{
    SPACING_SM, SPACING_XL, button_choice, button_choice_active, button_primary,
};

/// Render the genre list and the Next control.
///
/// While the catalog is loading (or after a failed fetch) there is simply
/// nothing to pick, and Next cannot advance.
pub fn view_genre<'a>(state: &'a AppState) -> Element<'a, Message> {
    let selected_id = state.genre_step.selected.as_ref().map(|genre| genre.id);

    let mut choices = row![].spacing(SPACING_SM);
    for genre in state.wizard.catalog.genres() {
        let is_active = selected_id == Some(genre.id);
        choices = choices.push(
            button(text(genre.name.as_str()).size(14))
                .on_press(Message::Genre(GenreMessage::Selected(genre.clone())))
                .padding([10.0, 18.0])
                .style(if is_active {
                    button_choice_active
                } else {
                    button_choice
                }),
        );
    }

    let next = button(text("Next").size(14))
        .on_press(Message::Genre(GenreMessage::NextClicked))
        .padding([12.0, 24.0])
        .style(button_primary);

    column![
        choices,
        Space::new().height(SPACING_XL),
        row![Space::new().width(Length::Fill), next],
    ]
    .into()
}

//! Subgenre pick screen.
//!
//! The current genre's standard subgenres plus the "Add new" option;
//! picking one of the two sides clears the other.

use iced::widget::{Space, button, column, row, text};
use iced::{Element, Length};

use bcs_model::Subgenre;

use crate::message::{Message, SubgenreMessage};
use crate::state::AppState;
use crate::theme::{
    SPACING_SM, SPACING_XL, button_choice, button_choice_active, button_primary, button_secondary,
};

/// Render the subgenre options for the genre picked upstream.
pub fn view_subgenre<'a>(state: &'a AppState) -> Element<'a, Message> {
    let subgenres: &[Subgenre] = state
        .wizard
        .draft
        .genre
        .as_ref()
        .map(|genre| genre.subgenres.as_slice())
        .unwrap_or(&[]);

    let selected_id = state
        .subgenre_step
        .selected
        .as_ref()
        .and_then(|subgenre| subgenre.id);

    let mut choices = row![].spacing(SPACING_SM);
    for subgenre in subgenres {
        let is_active = subgenre.id.is_some() && selected_id == subgenre.id;
        choices = choices.push(
            button(text(subgenre.name.as_str()).size(14))
                .on_press(Message::Subgenre(SubgenreMessage::Selected(
                    subgenre.clone(),
                )))
                .padding([10.0, 18.0])
                .style(if is_active {
                    button_choice_active
                } else {
                    button_choice
                }),
        );
    }
    choices = choices.push(
        button(text("Add new").size(14))
            .on_press(Message::Subgenre(SubgenreMessage::AddNewClicked))
            .padding([10.0, 18.0])
            .style(if state.subgenre_step.add_new {
                button_choice_active
            } else {
                button_choice
            }),
    );

    let back = button(text("Back").size(14))
        .on_press(Message::Subgenre(SubgenreMessage::BackClicked))
        .padding([12.0, 24.0])
        .style(button_secondary);

    let next = button(text("Next").size(14))
        .on_press(Message::Subgenre(SubgenreMessage::NextClicked))
        .padding([12.0, 24.0])
        .style(button_primary);

    column![
        choices,
        Space::new().height(SPACING_XL),
        row![back, Space::new().width(Length::Fill), next],
    ]
    .into()
}

//! Add-new-subgenre screen.

use iced::widget::{Space, button, checkbox, column, row, text};
use iced::{Alignment, Element, Length};

use bcs_model::fields;
use bcs_validate::Issue;

use crate::component::form_field;
use crate::message::{Message, NewSubgenreMessage};
use crate::state::AppState;
use crate::theme::{GRAY_600, SPACING_MD, SPACING_SM, SPACING_XL, button_primary, button_secondary};

/// Render the name entry and the description-required checkbox.
pub fn view_new_subgenre<'a>(state: &'a AppState) -> Element<'a, Message> {
    let step = &state.new_subgenre_step;

    let name_error = step.errors.for_field(fields::NAME).map(Issue::message);

    let name_field = form_field(
        "Subgenre name",
        &step.name,
        "Subgenre name",
        |value| Message::NewSubgenre(NewSubgenreMessage::NameChanged(value)),
        name_error,
    );

    let description_toggle = row![
        checkbox(step.description_required).on_toggle(|required| {
            Message::NewSubgenre(NewSubgenreMessage::DescriptionRequiredToggled(required))
        }),
        text("Description is required for this subgenre")
            .size(13)
            .color(GRAY_600),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let back = button(text("Back").size(14))
        .on_press(Message::NewSubgenre(NewSubgenreMessage::BackClicked))
        .padding([12.0, 24.0])
        .style(button_secondary);

    let next = button(text("Next").size(14))
        .on_press(Message::NewSubgenre(NewSubgenreMessage::NextClicked))
        .padding([12.0, 24.0])
        .style(button_primary);

    column![
        name_field,
        Space::new().height(SPACING_MD),
        description_toggle,
        Space::new().height(SPACING_XL),
        row![back, Space::new().width(Length::Fill), next],
    ]
    .into()
}

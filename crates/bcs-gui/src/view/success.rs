//! Success screen shown once the creation service accepts the book.

use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::theme::{GRAY_800, SPACING_LG, SPACING_XL, SUCCESS, button_primary};

/// Render the confirmation and the restart control.
pub fn view_success<'a>() -> Element<'a, Message> {
    let content = column![
        text("✓").size(48).color(SUCCESS),
        Space::new().height(SPACING_LG),
        text("Book added successfully").size(18).color(GRAY_800),
        Space::new().height(SPACING_LG),
        button(text("Add another book").size(14))
            .on_press(Message::RestartClicked)
            .padding([12.0, 24.0])
            .style(button_primary),
    ]
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Shrink)
        .padding(SPACING_XL)
        .into()
}

//! Form field components.
//!
//! Input fields with labels and inline error display, keyed by the
//! validation report's field paths.

use iced::widget::{column, container, pick_list, text, text_input};
use iced::{Element, Length};

use crate::theme::{ERROR, GRAY_600, SPACING_XS, text_input_default, text_input_error};

/// A labelled text input with an optional error message under it.
pub fn form_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> M + 'a,
    error: Option<String>,
) -> Element<'a, M> {
    let label_text = text(label).size(13).color(GRAY_600);

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(10.0)
        .width(Length::Fill)
        .style(if error.is_some() {
            text_input_error
        } else {
            text_input_default
        });

    let mut content = column![label_text, input].spacing(SPACING_XS);

    if let Some(message) = error {
        content = content.push(text(message).size(12).color(ERROR));
    }

    container(content).width(Length::Fill).into()
}

/// A labelled dropdown over a fixed option list.
pub fn select_field<'a, M: Clone + 'a>(
    label: &'a str,
    options: &'static [&'static str],
    selected: &str,
    placeholder: &'a str,
    on_select: impl Fn(&'static str) -> M + 'a,
    error: Option<String>,
) -> Element<'a, M> {
    let label_text = text(label).size(13).color(GRAY_600);

    let current = options.iter().copied().find(|option| *option == selected);
    let input = pick_list(options, current, on_select)
        .placeholder(placeholder)
        .padding(10.0)
        .width(Length::Fill);

    let mut content = column![label_text, input].spacing(SPACING_XS);

    if let Some(message) = error {
        content = content.push(text(message).size(12).color(ERROR));
    }

    container(content).width(Length::Fill).into()
}

/// A taller text input for the description.
///
/// Iced has no native textarea; a padded text input stands in for one.
pub fn text_area_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> M + 'a,
    error: Option<String>,
) -> Element<'a, M> {
    let label_text = text(label).size(13).color(GRAY_600);

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding([24.0, 10.0])
        .width(Length::Fill)
        .style(if error.is_some() {
            text_input_error
        } else {
            text_input_default
        });

    let mut content = column![label_text, input].spacing(SPACING_XS);

    if let Some(message) = error {
        content = content.push(text(message).size(12).color(ERROR));
    }

    container(content).width(Length::Fill).into()
}

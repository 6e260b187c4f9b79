//! Information form screen.

use iced::widget::{Space, button, column, row, text};
use iced::{Element, Length};

use bcs_model::fields;
use bcs_wizard::SubmissionState;

use crate::component::{form_field, select_field, text_area_field};
use crate::message::{InformationMessage, Message};
use crate::state::AppState;
use crate::theme::{SPACING_MD, SPACING_XL, button_primary, button_secondary};

/// Option lists the catalog service exposes no endpoint for.
const AUTHORS: &[&str] = &["Jane Austen", "William Faulkner"];
const PUBLISHERS: &[&str] = &["Jane Austen", "William Faulkner"];
const FORMATS: &[&str] = &["format 1", "format 2"];
const EDITION_LANGS: &[&str] = &["format 1", "format 2"];

fn info(msg: InformationMessage) -> Message {
    Message::Information(msg)
}

/// Render the full information form with inline errors.
pub fn view_information<'a>(state: &'a AppState) -> Element<'a, Message> {
    let step = &state.information_step;
    let form = &step.form;
    let error = |field: &str| step.error_message(field);

    let edition_row = row![
        form_field(
            "Edition",
            &form.edition,
            "Edition",
            |value| info(InformationMessage::EditionChanged(value)),
            error(fields::EDITION),
        ),
        select_field(
            "Edition language",
            EDITION_LANGS,
            &form.edition_lang,
            "Edition language",
            |value| info(InformationMessage::EditionLangPicked(value.to_string())),
            error(fields::EDITION_LANG),
        ),
    ]
    .spacing(SPACING_MD);

    let in_flight = state.wizard.submission == SubmissionState::InFlight;

    let back = button(text("Back").size(14))
        .on_press(info(InformationMessage::BackClicked))
        .padding([12.0, 24.0])
        .style(button_secondary);

    let add = button(text("Add").size(14))
        .on_press_maybe((!in_flight).then_some(info(InformationMessage::AddClicked)))
        .padding([12.0, 24.0])
        .style(button_primary);

    column![
        form_field(
            "Book title",
            &form.title,
            "Book title",
            |value| info(InformationMessage::TitleChanged(value)),
            error(fields::TITLE),
        ),
        select_field(
            "Author",
            AUTHORS,
            &form.author,
            "Author",
            |value| info(InformationMessage::AuthorPicked(value.to_string())),
            error(fields::AUTHOR),
        ),
        form_field(
            "ISBN",
            &form.isbn,
            "ISBN",
            |value| info(InformationMessage::IsbnChanged(value)),
            error(fields::ISBN),
        ),
        select_field(
            "Publisher",
            PUBLISHERS,
            &form.publisher,
            "Publisher",
            |value| info(InformationMessage::PublisherPicked(value.to_string())),
            error(fields::PUBLISHER),
        ),
        form_field(
            "Date published",
            &form.date,
            "YYYY-MM-DD",
            |value| info(InformationMessage::DateChanged(value)),
            error(fields::DATE),
        ),
        form_field(
            "Number of pages",
            &form.num_of_pages,
            "Number of pages",
            |value| info(InformationMessage::NumOfPagesChanged(value)),
            error(fields::NUM_OF_PAGES),
        ),
        select_field(
            "Format",
            FORMATS,
            &form.format,
            "Format",
            |value| info(InformationMessage::FormatPicked(value.to_string())),
            error(fields::FORMAT),
        ),
        edition_row,
        text_area_field(
            "Description",
            &form.desc,
            "Type the description...",
            |value| info(InformationMessage::DescChanged(value)),
            error(fields::DESC),
        ),
        Space::new().height(SPACING_XL),
        row![back, Space::new().width(Length::Fill), add],
    ]
    .spacing(SPACING_MD)
    .into()
}

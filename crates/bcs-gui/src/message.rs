//! Message hierarchy for the wizard.
//!
//! All user interactions and task results flow through these types into
//! `App::update`.

use bcs_model::{Genre, Subgenre, SubmissionOutcome};

/// Root message enum.
#[derive(Debug, Clone)]
pub enum Message {
    /// The startup genre catalog fetch resolved.
    GenresFetched(Result<Vec<Genre>, String>),

    /// Genre step interactions.
    Genre(GenreMessage),

    /// Subgenre step interactions.
    Subgenre(SubgenreMessage),

    /// Add-new-subgenre step interactions.
    NewSubgenre(NewSubgenreMessage),

    /// Information step interactions.
    Information(InformationMessage),

    /// The book creation call resolved.
    SubmissionFinished(SubmissionOutcome),

    /// "Add another book" on the success screen.
    RestartClicked,
}

/// Genre pick screen.
#[derive(Debug, Clone)]
pub enum GenreMessage {
    Selected(Genre),
    NextClicked,
}

/// Subgenre pick screen.
#[derive(Debug, Clone)]
pub enum SubgenreMessage {
    Selected(Subgenre),
    AddNewClicked,
    NextClicked,
    BackClicked,
}

/// Add-new-subgenre screen.
#[derive(Debug, Clone)]
pub enum NewSubgenreMessage {
    NameChanged(String),
    DescriptionRequiredToggled(bool),
    NextClicked,
    BackClicked,
}

/// Information form screen.
#[derive(Debug, Clone)]
pub enum InformationMessage {
    TitleChanged(String),
    AuthorPicked(String),
    IsbnChanged(String),
    PublisherPicked(String),
    DateChanged(String),
    NumOfPagesChanged(String),
    FormatPicked(String),
    EditionChanged(String),
    EditionLangPicked(String),
    DescChanged(String),
    AddClicked,
    BackClicked,
}

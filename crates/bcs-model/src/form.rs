//! Raw form values as typed on the information step.

use serde::{Deserialize, Serialize};

use crate::book::BookInformation;

/// The information step's field values before validation.
///
/// Everything is a string exactly as entered; the validator parses the date
/// and page count and produces a [`BookInformation`] on success. Seeding a
/// form from an already-confirmed record supports back-navigation without
/// data loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InformationForm {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    pub date: String,
    pub num_of_pages: String,
    pub format: String,
    pub desc: String,
    pub edition: String,
    pub edition_lang: String,
}

impl From<&BookInformation> for InformationForm {
    fn from(info: &BookInformation) -> Self {
        Self {
            title: info.title.clone(),
            author: info.author.clone(),
            publisher: info.publisher.clone(),
            isbn: info.isbn.clone(),
            date: info.date.format("%Y-%m-%d").to_string(),
            num_of_pages: info.num_of_pages.to_string(),
            format: info.format.clone(),
            desc: info.desc.clone(),
            edition: info.edition.clone(),
            edition_lang: info.edition_lang.clone(),
        }
    }
}

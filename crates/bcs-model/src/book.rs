//! The book record built up across the wizard steps.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{Genre, Subgenre};

/// The validated descriptive information entered on the final step.
///
/// Field names follow the catalog service's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInformation {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub isbn: String,
    pub date: NaiveDate,
    pub num_of_pages: u32,
    pub format: String,
    pub desc: String,
    pub edition: String,
    pub edition_lang: String,
}

/// The accumulating book record owned by the wizard orchestrator.
///
/// Each step confirmation produces a new draft via the `with_*` methods;
/// the draft is replaced, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subgenre: Option<Subgenre>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information: Option<BookInformation>,
}

impl BookDraft {
    /// A new draft with the genre replaced.
    pub fn with_genre(&self, genre: Genre) -> Self {
        Self {
            genre: Some(genre),
            ..self.clone()
        }
    }

    /// A new draft with the subgenre replaced (or cleared).
    pub fn with_subgenre(&self, subgenre: Option<Subgenre>) -> Self {
        Self {
            subgenre,
            ..self.clone()
        }
    }

    /// A new draft with the information record replaced.
    pub fn with_information(&self, information: BookInformation) -> Self {
        Self {
            information: Some(information),
            ..self.clone()
        }
    }

    /// The complete book, once all three slices are populated.
    pub fn complete(&self) -> Option<Book> {
        Some(Book {
            genre: self.genre.clone()?,
            subgenre: self.subgenre.clone()?,
            information: self.information.clone()?,
        })
    }
}

/// A complete book record as submitted to the catalog creation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub genre: Genre,
    pub subgenre: Subgenre,
    pub information: BookInformation,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn information() -> BookInformation {
        BookInformation {
            title: "Persuasion".to_string(),
            author: "Jane Austen".to_string(),
            publisher: "John Murray".to_string(),
            isbn: "978-1503290310".to_string(),
            date: NaiveDate::from_ymd_opt(1817, 12, 20).unwrap(),
            num_of_pages: 249,
            format: "format 1".to_string(),
            desc: String::new(),
            edition: "First".to_string(),
            edition_lang: "format 1".to_string(),
        }
    }

    #[test]
    fn draft_is_complete_only_with_all_slices() {
        let genre = Genre {
            id: 1,
            name: "Fiction".to_string(),
            subgenres: vec![],
        };
        let subgenre = Subgenre {
            id: Some(3),
            name: "Noir".to_string(),
            is_description_required: None,
        };

        let draft = BookDraft::default().with_genre(genre);
        assert!(draft.complete().is_none());

        let draft = draft
            .with_subgenre(Some(subgenre))
            .with_information(information());
        assert!(draft.complete().is_some());
    }

    #[test]
    fn with_genre_leaves_the_original_untouched() {
        let draft = BookDraft::default();
        let _ = draft.with_genre(Genre {
            id: 2,
            name: "Poetry".to_string(),
            subgenres: vec![],
        });
        assert!(draft.genre.is_none());
    }

    #[test]
    fn information_uses_service_field_names() {
        let json = serde_json::to_value(information()).unwrap();
        assert_eq!(json["numOfPages"], 249);
        assert_eq!(json["editionLang"], "format 1");
        assert_eq!(json["date"], "1817-12-20");
    }
}

//! Field paths and their display labels.
//!
//! Validation issues are keyed by field path; the paths double as lookup
//! keys for the inline error slot under each input. Labels are what the
//! error messages call the field.

pub const GENRE: &str = "genre";
pub const SUBGENRE: &str = "subgenre";

pub const NAME: &str = "name";

pub const TITLE: &str = "title";
pub const AUTHOR: &str = "author";
pub const PUBLISHER: &str = "publisher";
pub const ISBN: &str = "isbn";
pub const DATE: &str = "date";
pub const NUM_OF_PAGES: &str = "numOfPages";
pub const FORMAT: &str = "format";
pub const DESC: &str = "desc";
pub const EDITION: &str = "edition";
pub const EDITION_LANG: &str = "editionLang";

/// Display label for a field path.
///
/// The new-subgenre step calls its name field "Bookname", matching the
/// catalog service's vocabulary for user-defined subgenres.
pub fn label(field: &str) -> &'static str {
    match field {
        GENRE => "Genre",
        SUBGENRE => "Subgenre",
        NAME => "Bookname",
        TITLE => "Title",
        AUTHOR => "Author",
        PUBLISHER => "Publisher",
        ISBN => "Isbn",
        DATE => "Date",
        NUM_OF_PAGES => "Number of pages",
        FORMAT => "Format",
        DESC => "Description",
        EDITION => "Edition",
        EDITION_LANG => "Edition Language",
        _ => "Field",
    }
}

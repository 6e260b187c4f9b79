//! Information form rules.
//!
//! Unlike the pick steps, this check never stops early: every failing
//! field is reported in one pass, in field order, so the form can show all
//! inline messages at once.

use chrono::NaiveDate;

use bcs_model::{BookInformation, InformationForm, fields};

use crate::issue::Issue;

/// Minimum accepted page count.
const MIN_PAGES: u32 = 1;

/// Date format the form's date field produces.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check the whole information form, collecting every failure.
///
/// `description_required` is the chosen subgenre's flag: when set, an empty
/// description is an error; otherwise the description may stay empty.
pub fn check(
    form: &InformationForm,
    description_required: bool,
) -> Result<BookInformation, Vec<Issue>> {
    let mut issues = Vec::new();

    check_text(&mut issues, fields::TITLE, &form.title);
    check_text(&mut issues, fields::AUTHOR, &form.author);
    check_text(&mut issues, fields::PUBLISHER, &form.publisher);
    check_text(&mut issues, fields::ISBN, &form.isbn);

    let date = check_date(&mut issues, &form.date);
    let num_of_pages = check_pages(&mut issues, &form.num_of_pages);

    check_text(&mut issues, fields::FORMAT, &form.format);
    check_text(&mut issues, fields::EDITION, &form.edition);
    check_text(&mut issues, fields::EDITION_LANG, &form.edition_lang);

    if description_required && form.desc.trim().is_empty() {
        issues.push(Issue::Empty {
            field: fields::DESC.to_string(),
        });
    }

    if let (Some(date), Some(num_of_pages)) = (date, num_of_pages)
        && issues.is_empty()
    {
        return Ok(BookInformation {
            title: form.title.clone(),
            author: form.author.clone(),
            publisher: form.publisher.clone(),
            isbn: form.isbn.clone(),
            date,
            num_of_pages,
            format: form.format.clone(),
            desc: form.desc.clone(),
            edition: form.edition.clone(),
            edition_lang: form.edition_lang.clone(),
        });
    }

    Err(issues)
}

fn check_text(issues: &mut Vec<Issue>, field: &str, value: &str) {
    if value.trim().is_empty() {
        issues.push(Issue::Empty {
            field: field.to_string(),
        });
    }
}

fn check_date(issues: &mut Vec<Issue>, value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value.trim(), DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            issues.push(Issue::InvalidDate {
                field: fields::DATE.to_string(),
            });
            None
        }
    }
}

fn check_pages(issues: &mut Vec<Issue>, value: &str) -> Option<u32> {
    let Ok(pages) = value.trim().parse::<u32>() else {
        issues.push(Issue::NotNumeric {
            field: fields::NUM_OF_PAGES.to_string(),
        });
        return None;
    };

    if pages < MIN_PAGES {
        issues.push(Issue::BelowMinimum {
            field: fields::NUM_OF_PAGES.to_string(),
            min: MIN_PAGES,
        });
        return None;
    }

    Some(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> InformationForm {
        InformationForm {
            title: "Sanditon".to_string(),
            author: "Jane Austen".to_string(),
            publisher: "John Murray".to_string(),
            isbn: "978-0140433807".to_string(),
            date: "1817-03-01".to_string(),
            num_of_pages: "120".to_string(),
            format: "format 1".to_string(),
            desc: String::new(),
            edition: "First".to_string(),
            edition_lang: "format 1".to_string(),
        }
    }

    #[test]
    fn complete_form_parses_into_information() {
        let info = check(&filled_form(), false).expect("valid form");
        assert_eq!(info.num_of_pages, 120);
        assert_eq!(info.date.to_string(), "1817-03-01");
    }

    #[test]
    fn zero_pages_is_below_minimum() {
        let mut form = filled_form();
        form.num_of_pages = "0".to_string();
        let issues = check(&form, false).unwrap_err();
        assert_eq!(
            issues[0],
            Issue::BelowMinimum {
                field: fields::NUM_OF_PAGES.to_string(),
                min: 1
            }
        );
    }

    #[test]
    fn garbage_pages_is_not_numeric() {
        let mut form = filled_form();
        form.num_of_pages = "lots".to_string();
        let issues = check(&form, false).unwrap_err();
        assert_eq!(issues[0].field(), fields::NUM_OF_PAGES);
        assert!(issues[0].message().contains("integer"));
    }
}

//! Shared view components.

mod form_field;

pub use form_field::{form_field, select_field, text_area_field};

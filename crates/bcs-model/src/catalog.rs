//! Catalog classification entities: genres and their subgenres.
//!
//! Genres are sourced from the catalog listing service and treated as
//! read-only. A subgenre either comes from a genre's standard list (and
//! carries a numeric id) or is defined by the user during intake (no id).

use serde::{Deserialize, Serialize};

/// A top-level catalog genre owning a list of standard subgenres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub subgenres: Vec<Subgenre>,
}

/// A catalog subgenre.
///
/// Standard subgenres carry the service-assigned `id`; a user-defined
/// subgenre has none and the field is omitted from serialized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subgenre {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(
        rename = "isDescriptionRequired",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_description_required: Option<bool>,
}

impl Subgenre {
    /// Whether a book filed under this subgenre must carry a description.
    pub fn requires_description(&self) -> bool {
        self.is_description_required.unwrap_or(false)
    }
}

/// A user-defined subgenre as entered on the add-new-subgenre step.
///
/// Converted into a [`Subgenre`] without an id when merged into the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubgenre {
    pub name: String,
    #[serde(rename = "isDescriptionRequired")]
    pub is_description_required: bool,
}

impl From<NewSubgenre> for Subgenre {
    fn from(new: NewSubgenre) -> Self {
        Subgenre {
            id: None,
            name: new.name,
            is_description_required: Some(new.is_description_required),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_subgenre_keeps_id_on_the_wire() {
        let subgenre = Subgenre {
            id: Some(3),
            name: "Noir".to_string(),
            is_description_required: Some(true),
        };
        let json = serde_json::to_value(&subgenre).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["isDescriptionRequired"], true);
    }

    #[test]
    fn user_defined_subgenre_has_no_id_field() {
        let subgenre: Subgenre = NewSubgenre {
            name: "Solarpunk".to_string(),
            is_description_required: false,
        }
        .into();
        let json = serde_json::to_value(&subgenre).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["isDescriptionRequired"], false);
    }

    #[test]
    fn genre_deserializes_without_subgenres() {
        let genre: Genre = serde_json::from_str(r#"{"id": 1, "name": "Fiction"}"#).unwrap();
        assert!(genre.subgenres.is_empty());
    }
}

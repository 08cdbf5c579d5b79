//! # Character Records
//!
//! A `CharacterRecord` is one entry of the `results` array returned by the
//! people endpoint. Fields are kept verbatim; nothing here validates them.
//!
//! `gender` stays as the raw tag the API sent (`"male"`, `"n/a"`, ...), because
//! that exact string is what gets favorited. `Gender` is a display-side reading
//! of that tag.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub name: String,
    /// Raw gender tag. `None` when the field is missing or `null`.
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub mass: Option<String>,
    #[serde(default)]
    pub hair_color: Option<String>,
    #[serde(default)]
    pub eye_color: Option<String>,
    #[serde(default)]
    pub birth_year: Option<String>,
}

impl CharacterRecord {
    /// Record with just a name and gender tag; the optional details stay empty.
    pub fn new(name: impl Into<String>, gender: Option<&str>) -> Self {
        Self {
            name: name.into(),
            gender: gender.map(str::to_string),
            height: None,
            mass: None,
            hair_color: None,
            eye_color: None,
            birth_year: None,
        }
    }

    pub fn gender_kind(&self) -> Gender {
        Gender::from_tag(self.gender.as_deref())
    }

    /// Label/value pairs for the details view, skipping fields the API left out.
    pub fn detail_rows(&self) -> Vec<(&'static str, &str)> {
        [
            ("Height", self.height.as_deref()),
            ("Mass", self.mass.as_deref()),
            ("Hair", self.hair_color.as_deref()),
            ("Eyes", self.eye_color.as_deref()),
            ("Born", self.birth_year.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
    Unspecified,
}

impl Gender {
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("male") => Gender::Male,
            Some("female") => Gender::Female,
            None | Some("" | "n/a" | "none" | "unknown") => Gender::Unspecified,
            Some(_) => Gender::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::Unspecified => "unspecified",
        }
    }
}

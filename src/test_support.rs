//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::action::{Action, update};
use crate::core::character::CharacterRecord;
use crate::core::state::App;
use crate::swapi::{CharacterSource, FetchError};

/// A source that returns a canned result without touching the network.
pub struct StubSource {
    result: Result<Vec<CharacterRecord>, FetchError>,
}

impl StubSource {
    pub fn ok() -> Self {
        Self {
            result: Ok(sample_characters()),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl CharacterSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_characters(&self) -> Result<Vec<CharacterRecord>, FetchError> {
        self.result.clone()
    }
}

/// Four characters covering every gender reading.
pub fn sample_characters() -> Vec<CharacterRecord> {
    let mut luke = CharacterRecord::new("Luke Skywalker", Some("male"));
    luke.height = Some("172".to_string());
    luke.birth_year = Some("19BBY".to_string());
    vec![
        luke,
        CharacterRecord::new("Leia Organa", Some("female")),
        CharacterRecord::new("R2-D2", Some("n/a")),
        CharacterRecord::new("Jabba Desilijic Tiure", Some("hermaphrodite")),
    ]
}

/// Creates a test App with the sample characters already loaded.
pub fn test_app() -> App {
    let mut app = App::new();
    update(&mut app, Action::SetCharacters(sample_characters()));
    app
}

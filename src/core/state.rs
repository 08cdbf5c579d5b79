//! # Application State
//!
//! Core business state for Holonet. No TUI types live here; presentation
//! state (selected tab, list cursor, open details) belongs to the `tui` module.
//!
//! ```text
//! App
//! ├── favorites: Store          // favorites tally + its subscribers
//! ├── roster: Roster            // fetched character list
//! │   ├── characters: Vec<CharacterRecord>
//! │   ├── is_loading: bool
//! │   └── error: Option<String>
//! └── status_message: String    // title bar text
//! ```
//!
//! The roster is its own slice on purpose: favoriting records a gender tag in
//! the tally, it never touches the list the user is browsing.
//!
//! State changes only happen through `update(app, action)` in action.rs.

use crate::core::character::CharacterRecord;
use crate::core::store::Store;

/// The list of characters shown on the Characters tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    pub characters: Vec<CharacterRecord>,
    pub is_loading: bool,
    /// Last fetch failure. Any previously loaded list is kept alongside it.
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct App {
    pub favorites: Store,
    pub roster: Roster,
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            favorites: Store::new(),
            roster: Roster::default(),
            status_message: String::from("Welcome to Holonet!"),
        }
    }

    pub fn character(&self, index: usize) -> Option<&CharacterRecord> {
        self.roster.characters.get(index)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::favorites::FavoritesState;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = App::new();
        assert_eq!(app.status_message, "Welcome to Holonet!");
        assert!(!app.roster.is_loading);
        assert!(app.roster.characters.is_empty());
        assert_eq!(app.favorites.state(), &FavoritesState::default());
    }

    #[test]
    fn test_character_lookup() {
        let app = test_app();
        assert_eq!(app.character(0).map(|c| c.name.as_str()), Some("Luke Skywalker"));
        assert!(app.character(99).is_none());
    }
}

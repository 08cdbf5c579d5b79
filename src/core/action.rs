//! # Actions
//!
//! Everything that can happen in Holonet becomes an `Action`.
//! User favorites a character? That's `Action::AddToFavorites(gender)`.
//! The character fetch comes back? That's `Action::SetCharacters(list)`.
//!
//! `update()` applies an action to the `App` and returns an `Effect` telling
//! the adapter what I/O to start. No I/O happens here.
//!
//! ```text
//! App + Action  →  update()  →  App' + Effect
//! ```
//!
//! Every action is offered to the favorites store first, the same way each
//! slice reducer sees every action. The store ignores the ones it doesn't own.

use log::debug;

use crate::core::character::CharacterRecord;
use crate::core::favorites::classify;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Start loading the character list.
    FetchCharacters,
    /// The character list arrived.
    SetCharacters(Vec<CharacterRecord>),
    /// The character fetch failed; the message is already logged.
    FetchFailed(String),
    /// Favorite a gender tag (the raw tag of the selected character).
    AddToFavorites(Option<String>),
    ResetFavorites,
    Quit,
}

/// Side effects the adapter must carry out after `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchCharacters,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    let changed = app.favorites.dispatch(&action);
    if changed {
        debug!("Favorites tally now: {:?}", app.favorites.state());
    }

    match action {
        Action::FetchCharacters => {
            if app.roster.is_loading {
                debug!("Fetch already in flight, ignoring");
                return Effect::None;
            }
            app.roster.is_loading = true;
            app.roster.error = None;
            app.status_message = String::from("Loading characters...");
            Effect::FetchCharacters
        }
        Action::SetCharacters(characters) => {
            app.status_message = format!("Loaded {} characters", characters.len());
            app.roster.characters = characters;
            app.roster.is_loading = false;
            app.roster.error = None;
            Effect::None
        }
        Action::FetchFailed(message) => {
            app.roster.is_loading = false;
            app.roster.error = Some(message);
            app.status_message = String::from("Could not load characters");
            Effect::None
        }
        Action::AddToFavorites(gender) => {
            let tag = gender.as_deref().unwrap_or("unknown");
            app.status_message = format!(
                "Favorited {} ({})",
                tag,
                classify(gender.as_deref()).label()
            );
            Effect::None
        }
        Action::ResetFavorites => {
            app.status_message = String::from("Favorites reset");
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::favorites::FavoritesState;
    use crate::test_support::sample_characters;

    #[test]
    fn test_fetch_sets_loading_and_requests_effect() {
        let mut app = App::new();
        let effect = update(&mut app, Action::FetchCharacters);
        assert_eq!(effect, Effect::FetchCharacters);
        assert!(app.roster.is_loading);
        assert_eq!(app.status_message, "Loading characters...");
    }

    #[test]
    fn test_fetch_while_loading_is_ignored() {
        let mut app = App::new();
        update(&mut app, Action::FetchCharacters);
        assert_eq!(update(&mut app, Action::FetchCharacters), Effect::None);
        assert!(app.roster.is_loading);
    }

    #[test]
    fn test_set_characters_fills_roster_not_favorites() {
        let mut app = App::new();
        update(&mut app, Action::FetchCharacters);
        let effect = update(&mut app, Action::SetCharacters(sample_characters()));

        assert_eq!(effect, Effect::None);
        assert!(!app.roster.is_loading);
        assert_eq!(app.roster.characters.len(), 4);
        assert_eq!(app.status_message, "Loaded 4 characters");
        assert_eq!(app.favorites.state(), &FavoritesState::default());
    }

    #[test]
    fn test_fetch_failed_keeps_stale_list() {
        let mut app = App::new();
        update(&mut app, Action::SetCharacters(sample_characters()));
        update(&mut app, Action::FetchCharacters);
        let effect = update(&mut app, Action::FetchFailed("network error: timed out".to_string()));

        assert_eq!(effect, Effect::None);
        assert!(!app.roster.is_loading);
        assert_eq!(app.roster.error.as_deref(), Some("network error: timed out"));
        assert_eq!(app.roster.characters.len(), 4);
    }

    #[test]
    fn test_fetch_clears_previous_error() {
        let mut app = App::new();
        update(&mut app, Action::FetchFailed("boom".to_string()));
        update(&mut app, Action::FetchCharacters);
        assert!(app.roster.error.is_none());
    }

    #[test]
    fn test_add_to_favorites_updates_tally_and_status() {
        let mut app = App::new();
        update(&mut app, Action::AddToFavorites(Some("female".to_string())));
        update(&mut app, Action::AddToFavorites(Some("n/a".to_string())));

        let tally = app.favorites.state();
        assert_eq!(tally.total_female, 1);
        assert_eq!(tally.total_other, 1);
        assert_eq!(app.status_message, "Favorited n/a (Other)");
    }

    #[test]
    fn test_reset_favorites() {
        let mut app = App::new();
        update(&mut app, Action::AddToFavorites(Some("male".to_string())));
        update(&mut app, Action::ResetFavorites);
        assert_eq!(app.favorites.state(), &FavoritesState::default());
        assert_eq!(app.status_message, "Favorites reset");
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}

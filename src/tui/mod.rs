//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One thread owns `App`. The character fetch runs on the tokio runtime and
//! sends its result back as an `Action` over an mpsc channel; the loop drains
//! that channel between frames, so every state change happens here.
//!
//! Redraws only happen after an event or a background action. While the fetch
//! is in flight the loop polls every ~100ms, otherwise it sleeps up to 500ms.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};

use crate::StartTab;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::swapi::{CharacterSource, SwapiClient};
use crate::tui::component::EventHandler;
use crate::tui::components::{CharacterListEvent, CharacterListState, DetailsEvent, details_event};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Characters,
    Favorites,
}

impl Tab {
    pub fn index(&self) -> usize {
        match self {
            Tab::Characters => 0,
            Tab::Favorites => 1,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Characters => Tab::Favorites,
            Tab::Favorites => Tab::Characters,
        }
    }
}

impl From<StartTab> for Tab {
    fn from(tab: StartTab) -> Self {
        match tab {
            StartTab::Characters => Tab::Characters,
            StartTab::Favorites => Tab::Favorites,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub tab: Tab,
    pub character_list: CharacterListState,
    /// Roster index of the character whose details are open (None = closed).
    pub details: Option<usize>,
}

impl TuiState {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            character_list: CharacterListState::new(),
            details: None,
        }
    }
}

/// Routes one terminal event. Returns the effect of any action it dispatched.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    if matches!(event, TuiEvent::ForceQuit) {
        return dispatch(app, Action::Quit);
    }

    // Details overlay captures everything while open
    if let Some(index) = tui.details {
        match details_event(&event) {
            Some(DetailsEvent::AddToFavorites) => {
                let gender = app.character(index).map(|c| c.gender.clone());
                match gender {
                    Some(gender) => return dispatch(app, Action::AddToFavorites(gender)),
                    None => {
                        warn!("Details open for missing roster index {}", index);
                        tui.details = None;
                    }
                }
            }
            Some(DetailsEvent::Back) => tui.details = None,
            None => {}
        }
        return Effect::None;
    }

    match event {
        TuiEvent::InputChar('q') => return dispatch(app, Action::Quit),
        TuiEvent::NextTab => {
            tui.tab = tui.tab.next();
            return Effect::None;
        }
        TuiEvent::InputChar('1') => {
            tui.tab = Tab::Characters;
            return Effect::None;
        }
        TuiEvent::InputChar('2') => {
            tui.tab = Tab::Favorites;
            return Effect::None;
        }
        _ => {}
    }

    match tui.tab {
        Tab::Characters => {
            tui.character_list.sync_len(app.roster.characters.len());
            if let Some(CharacterListEvent::Open(index)) = tui.character_list.handle_event(&event) {
                tui.details = Some(index);
            }
            Effect::None
        }
        Tab::Favorites => match event {
            TuiEvent::InputChar('r') => dispatch(app, Action::ResetFavorites),
            _ => Effect::None,
        },
    }
}

fn dispatch(app: &mut App, action: Action) -> Effect {
    debug!("Dispatching {:?}", action);
    update(app, action)
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn CharacterSource> =
        Arc::new(SwapiClient::new(config.base_url.clone(), config.timeout));
    let mut app = App::new();
    let mut tui = TuiState::new(config.start_tab.into());

    app.favorites.subscribe(|tally| {
        info!(
            "Favorites changed: male={} female={} other={} logged={}",
            tally.total_male,
            tally.total_female,
            tally.total_other,
            tally.total()
        );
    });

    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut fetch_handle: Option<tokio::task::AbortHandle> = None;

    // Characters screen mount
    if dispatch(&mut app, Action::FetchCharacters) == Effect::FetchCharacters {
        fetch_handle = Some(spawn_fetch(source.clone(), tx.clone()));
    }

    let mut needs_redraw = true;
    let mut should_quit = false;

    while !should_quit {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                ratatui::restore();
                return Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if app.roster.is_loading {
            std::time::Duration::from_millis(100)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            match handle_event(&mut app, &mut tui, event) {
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                Effect::FetchCharacters => {
                    fetch_handle = Some(spawn_fetch(source.clone(), tx.clone()));
                }
                Effect::None => {}
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match dispatch(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::FetchCharacters => {
                    fetch_handle = Some(spawn_fetch(source.clone(), tx.clone()));
                }
                Effect::None => {}
            }
        }
    }

    if let Some(handle) = fetch_handle {
        handle.abort();
    }

    ratatui::restore();
    info!("Holonet shutting down");
    Ok(())
}

/// Fetches characters on the runtime and reports back with exactly one action.
/// Failures are logged here and not retried.
fn spawn_fetch(source: Arc<dyn CharacterSource>, tx: mpsc::Sender<Action>) -> tokio::task::AbortHandle {
    info!("Spawning character fetch via {}", source.name());
    let handle = tokio::spawn(async move {
        let action = match source.fetch_characters().await {
            Ok(characters) => Action::SetCharacters(characters),
            Err(e) => {
                warn!("Error fetching characters: {}", e);
                Action::FetchFailed(e.to_string())
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });
    handle.abort_handle()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::favorites::FavoritesState;
    use crate::swapi::FetchError;
    use crate::test_support::{StubSource, test_app};

    #[test]
    fn test_tab_cycle_and_jump() {
        let mut app = test_app();
        let mut tui = TuiState::new(Tab::Characters);
        handle_event(&mut app, &mut tui, TuiEvent::NextTab);
        assert_eq!(tui.tab, Tab::Favorites);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('1'));
        assert_eq!(tui.tab, Tab::Characters);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('2'));
        assert_eq!(tui.tab, Tab::Favorites);
    }

    #[test]
    fn test_browse_open_and_favorite() {
        let mut app = test_app();
        let mut tui = TuiState::new(Tab::Characters);

        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(tui.details, Some(1));

        let effect = handle_event(&mut app, &mut tui, TuiEvent::InputChar('f'));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.favorites.state().total_female, 1);
        // Favoriting twice logs twice
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.favorites.state().total_female, 2);

        handle_event(&mut app, &mut tui, TuiEvent::Escape);
        assert_eq!(tui.details, None);
    }

    #[test]
    fn test_details_swallow_tab_and_quit_keys() {
        let mut app = test_app();
        let mut tui = TuiState::new(Tab::Characters);
        tui.details = Some(0);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::InputChar('q')), Effect::None);
        handle_event(&mut app, &mut tui, TuiEvent::NextTab);
        assert_eq!(tui.tab, Tab::Characters);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_reset_only_on_favorites_tab() {
        let mut app = test_app();
        update(&mut app, Action::AddToFavorites(Some("male".to_string())));
        let mut tui = TuiState::new(Tab::Characters);

        handle_event(&mut app, &mut tui, TuiEvent::InputChar('r'));
        assert_eq!(app.favorites.state().total_male, 1);

        tui.tab = Tab::Favorites;
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('r'));
        assert_eq!(app.favorites.state(), &FavoritesState::default());
    }

    #[test]
    fn test_quit_key() {
        let mut app = test_app();
        let mut tui = TuiState::new(Tab::Favorites);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::InputChar('q')), Effect::Quit);
    }

    #[test]
    fn test_start_tab_conversion() {
        assert_eq!(Tab::from(StartTab::Favorites), Tab::Favorites);
        assert_eq!(Tab::from(StartTab::Characters), Tab::Characters);
    }

    #[tokio::test]
    async fn test_spawn_fetch_sends_characters() {
        let (tx, rx) = mpsc::channel();
        let handle = spawn_fetch(Arc::new(StubSource::ok()), tx);
        while !handle.is_finished() {
            tokio::task::yield_now().await;
        }
        match rx.try_recv() {
            Ok(Action::SetCharacters(characters)) => assert_eq!(characters.len(), 4),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_spawn_fetch_reports_failure() {
        let (tx, rx) = mpsc::channel();
        let source = StubSource::failing(FetchError::Api {
            status: 500,
            message: "down".to_string(),
        });
        let handle = spawn_fetch(Arc::new(source), tx);
        while !handle.is_finished() {
            tokio::task::yield_now().await;
        }
        assert_eq!(
            rx.try_recv().ok(),
            Some(Action::FetchFailed("API error (HTTP 500): down".to_string()))
        );
    }
}

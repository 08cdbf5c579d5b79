//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top status line
//! - `TabBar`: Characters / Favorites switcher
//! - `FavoritesPanel`: tally totals and log
//! - `CharacterDetails`: overlay for one character
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `CharacterList`: cursor over the roster, emits `Open(index)`
//!
//! Components receive external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! FavoritesPanel::new(app.favorites.state()).render(frame, area);
//!
//! // Bad: hidden dependency on global state
//! FavoritesPanel::render(frame, area); // reads from some global store
//! ```

pub mod character_details;
pub mod character_list;
pub mod favorites_panel;
mod tab_bar;
mod title_bar;

pub use character_details::{CharacterDetails, DetailsEvent, details_event};
pub use character_list::{CharacterList, CharacterListEvent, CharacterListState};
pub use favorites_panel::FavoritesPanel;
pub use tab_bar::TabBar;
pub use title_bar::TitleBar;

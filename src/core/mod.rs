//! # Core Application Logic
//!
//! This module contains Holonet's business logic.
//! It knows nothing about any specific UI technology or HTTP client.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Action (events)      │
//!                    │  • update() / reduce()  │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │   SWAPI    │
//!         │  Adapter   │                  │   client   │
//!         │ (ratatui)  │                  │ (reqwest)  │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`character`]: `CharacterRecord` as the API returns it
//! - [`favorites`]: the favorites tally and its pure `reduce()`
//! - [`store`]: owned store that notifies subscribers on change
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod character;
pub mod config;
pub mod favorites;
pub mod state;
pub mod store;

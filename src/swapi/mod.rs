//! # SWAPI Adapter
//!
//! Fetches the character list from the Star Wars API. The TUI only sees the
//! `CharacterSource` trait, so tests can swap in a stub.

pub mod client;
pub mod source;

pub use client::{PeoplePage, SwapiClient};
pub use source::{CharacterSource, FetchError};

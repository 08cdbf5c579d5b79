//! Holonet library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod swapi;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Tab shown when the TUI opens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StartTab {
    #[default]
    Characters,
    Favorites,
}

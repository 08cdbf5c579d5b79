//! # Favorites Tally
//!
//! Running counts of favorited genders plus the ordered log of every tag
//! that was favorited.
//!
//! ```text
//! FavoritesState
//! ├── total_male: u32
//! ├── total_female: u32
//! ├── total_other: u32
//! └── characters: Vec<Option<String>>   // one entry per AddToFavorites
//! ```
//!
//! `reduce()` is the only way to get a new tally. It never touches the
//! input state, never logs, and never fails: any tag that is not exactly
//! `"male"` or `"female"` (including `""` and a missing tag) lands in the
//! other bucket.

use crate::core::action::Action;

/// One of the three counters a favorited gender tag is counted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Male,
    Female,
    Other,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Male, Bucket::Female, Bucket::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Male => "Male",
            Bucket::Female => "Female",
            Bucket::Other => "Other",
        }
    }
}

/// Maps a raw gender tag to its bucket. Exact, case-sensitive match.
pub fn classify(gender: Option<&str>) -> Bucket {
    match gender {
        Some("male") => Bucket::Male,
        Some("female") => Bucket::Female,
        _ => Bucket::Other,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesState {
    pub total_male: u32,
    pub total_female: u32,
    pub total_other: u32,
    pub characters: Vec<Option<String>>,
}

impl FavoritesState {
    pub fn count(&self, bucket: Bucket) -> u32 {
        match bucket {
            Bucket::Male => self.total_male,
            Bucket::Female => self.total_female,
            Bucket::Other => self.total_other,
        }
    }

    pub fn total(&self) -> usize {
        self.characters.len()
    }

    fn counter_mut(&mut self, bucket: Bucket) -> &mut u32 {
        match bucket {
            Bucket::Male => &mut self.total_male,
            Bucket::Female => &mut self.total_female,
            Bucket::Other => &mut self.total_other,
        }
    }
}

/// Applies one action to the tally and returns the next tally.
///
/// Only `AddToFavorites` and `ResetFavorites` are handled here; every other
/// action yields a copy of `state`.
pub fn reduce(state: &FavoritesState, action: &Action) -> FavoritesState {
    match action {
        Action::AddToFavorites(gender) => {
            let mut next = state.clone();
            next.characters.push(gender.clone());
            let counter = next.counter_mut(classify(gender.as_deref()));
            *counter = counter.saturating_add(1);
            next
        }
        Action::ResetFavorites => FavoritesState::default(),
        _ => state.clone(),
    }
}

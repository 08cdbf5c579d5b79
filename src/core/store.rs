//! # Favorites Store
//!
//! Owns the current `FavoritesState` and the list of observers that want to
//! hear about changes. There is exactly one store per `App`, passed around by
//! reference; nothing global.
//!
//! ```text
//! dispatch(action)
//!     │
//!     ▼
//! reduce(&state, &action) ──► next
//!     │
//!     ├── next == state  →  nothing else happens
//!     └── next != state  →  state = next, notify subscribers in order
//! ```

use crate::core::action::Action;
use crate::core::favorites::{FavoritesState, reduce};

pub type Subscriber = Box<dyn FnMut(&FavoritesState) + Send>;

/// Handle returned by `subscribe()`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct Store {
    state: FavoritesState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FavoritesState) -> Self {
        Self {
            state,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &FavoritesState {
        &self.state
    }

    /// Reduces `action` into the held state. Returns true if the state changed,
    /// in which case every subscriber has already been called with the new state.
    pub fn dispatch(&mut self, action: &Action) -> bool {
        let next = reduce(&self.state, action);
        if next == self.state {
            return false;
        }
        self.state = next;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.state);
        }
        true
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&FavoritesState) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

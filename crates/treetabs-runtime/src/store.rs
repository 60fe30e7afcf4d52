#![forbid(unsafe_code)]

//! Centralized reducer-style store.
//!
//! State changes go through [`CentralStore::dispatch`] as [`Action`]s;
//! each action replaces one field of one tree's slot, and subscribers are
//! notified after every dispatch. The [`StateContainer`] impl forwards the
//! trait's setters to `dispatch`, which keeps the store interchangeable
//! with the shared-context container.

use std::collections::HashSet;

use crate::container::{StateContainer, TreeId, TreeSlot, TreeSlots};

/// A state-changing action. Each variant replaces one field wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace a tree's checked-key set.
    SetChecked(TreeId, HashSet<String>),
    /// Replace a tree's expanded-key set.
    SetExpanded(TreeId, HashSet<String>),
    /// Replace a tree's cursor key.
    SetActive(TreeId, Option<String>),
}

/// Callback invoked with the full state after each dispatch.
pub type Subscriber = Box<dyn FnMut(&TreeSlots)>;

/// Single owner of all tree state, mutated only through actions.
#[derive(Default)]
pub struct CentralStore {
    state: TreeSlots,
    subscribers: Vec<Subscriber>,
}

impl std::fmt::Debug for CentralStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CentralStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl CentralStore {
    /// Create a store with empty state for both trees.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state of both trees.
    #[must_use]
    pub fn state(&self) -> &TreeSlots {
        &self.state
    }

    /// Register a callback to run after every dispatch.
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Apply an action and notify subscribers.
    pub fn dispatch(&mut self, action: Action) {
        crate::trace!(?action, "dispatch");
        match action {
            Action::SetChecked(id, keys) => self.state.get_mut(id).checked = keys,
            Action::SetExpanded(id, keys) => self.state.get_mut(id).expanded = keys,
            Action::SetActive(id, key) => self.state.get_mut(id).active = key,
        }
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

impl StateContainer for CentralStore {
    fn slot(&self, id: TreeId) -> TreeSlot {
        self.state.get(id).clone()
    }

    fn set_checked(&mut self, id: TreeId, keys: HashSet<String>) {
        self.dispatch(Action::SetChecked(id, keys));
    }

    fn set_expanded(&mut self, id: TreeId, keys: HashSet<String>) {
        self.dispatch(Action::SetExpanded(id, keys));
    }

    fn set_active(&mut self, id: TreeId, key: Option<String>) {
        self.dispatch(Action::SetActive(id, key));
    }
}

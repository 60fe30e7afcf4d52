#![forbid(unsafe_code)]

//! Keyboard cursor and expansion state machine.
//!
//! [`NavState`] is the per-tree pair of expanded keys and the active
//! (cursor) key. [`NavState::apply`] maps a [`NavEvent`] to the next state
//! over the flattened visible sequence of the tree. The policy is "expand
//! before descend": move-down on an unexpanded branch expands it and keeps
//! the cursor in place; move-up never auto-collapses. Activation does not
//! change navigation state, it only reports which key to toggle.
//!
//! Stale active keys (no longer in the tree) make transitions no-ops; the
//! machine never panics on them.

use std::collections::HashSet;

use crate::event::{KeyCode, KeyEvent};
use crate::tree::TreeData;

/// A navigation input, decoupled from physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Move the cursor down (or expand an unexpanded branch under it).
    MoveDown,
    /// Move the cursor up.
    MoveUp,
    /// Expand the branch under the cursor.
    Expand,
    /// Collapse the branch under the cursor.
    Collapse,
    /// Toggle the checked state of the node under the cursor.
    Activate,
}

impl NavEvent {
    /// Map a key event to a navigation event.
    ///
    /// Arrows move and expand/collapse, Space and Enter activate. Release
    /// events and unmapped keys return `None`.
    #[must_use]
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if !key.is_press() {
            return None;
        }
        match key.code {
            KeyCode::Down => Some(Self::MoveDown),
            KeyCode::Up => Some(Self::MoveUp),
            KeyCode::Right => Some(Self::Expand),
            KeyCode::Left => Some(Self::Collapse),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Self::Activate),
            _ => None,
        }
    }
}

/// Result of applying a [`NavEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// The event did not apply in the current state.
    Unchanged,
    /// Expanded keys and/or the active key changed.
    Updated,
    /// The node with this key should be toggled by the selection engine.
    Toggled(String),
}

/// Per-tree navigation state: expanded keys plus the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    expanded: HashSet<String>,
    active: Option<String>,
}

impl NavState {
    /// Initial state: nothing expanded, no cursor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild navigation state from externally stored parts.
    #[must_use]
    pub fn from_parts(expanded: HashSet<String>, active: Option<String>) -> Self {
        Self { expanded, active }
    }

    /// Decompose into `(expanded, active)` for external storage.
    #[must_use]
    pub fn into_parts(self) -> (HashSet<String>, Option<String>) {
        (self.expanded, self.active)
    }

    /// Keys whose children are currently visible.
    #[must_use]
    pub fn expanded(&self) -> &HashSet<String> {
        &self.expanded
    }

    /// The key under keyboard focus, if any.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Replace the expanded set (pointer-driven expand/collapse from the
    /// rendering layer).
    pub fn set_expanded(&mut self, keys: HashSet<String>) {
        self.expanded = keys;
    }

    /// Move the cursor to `key`, or clear it with `None`.
    ///
    /// A key absent from `tree` is ignored.
    pub fn set_active(&mut self, tree: &TreeData, key: Option<String>) {
        match key {
            Some(k) if !tree.contains(&k) => {
                crate::debug!(key = %k, "set_active ignored: key not in tree");
            }
            other => self.active = other,
        }
    }

    /// Apply a navigation event against `tree`, returning what changed.
    pub fn apply(&mut self, tree: &TreeData, event: NavEvent) -> NavOutcome {
        let flat = tree.flatten_visible(&self.expanded);
        let active_index = self
            .active
            .as_deref()
            .and_then(|key| flat.iter().position(|f| f.node.key() == key));

        match event {
            NavEvent::MoveDown => match self.active.as_deref() {
                None => {
                    if let Some(first) = flat.first() {
                        self.active = Some(first.node.key().to_string());
                        NavOutcome::Updated
                    } else {
                        NavOutcome::Unchanged
                    }
                }
                Some(active) => {
                    let Some(node) = tree.find(active) else {
                        return NavOutcome::Unchanged;
                    };
                    if !node.is_leaf() && !self.expanded.contains(active) {
                        // Expand before descend: the cursor stays put.
                        self.expanded.insert(active.to_string());
                        NavOutcome::Updated
                    } else if let Some(index) = active_index {
                        if index + 1 < flat.len() {
                            self.active = Some(flat[index + 1].node.key().to_string());
                            NavOutcome::Updated
                        } else {
                            NavOutcome::Unchanged
                        }
                    } else {
                        NavOutcome::Unchanged
                    }
                }
            },
            NavEvent::MoveUp => {
                if let Some(index) = active_index {
                    if index > 0 {
                        self.active = Some(flat[index - 1].node.key().to_string());
                        return NavOutcome::Updated;
                    }
                }
                NavOutcome::Unchanged
            }
            NavEvent::Expand => {
                if let Some(active) = self.active.as_deref() {
                    if let Some(node) = tree.find(active) {
                        if !node.is_leaf() && !self.expanded.contains(active) {
                            self.expanded.insert(active.to_string());
                            return NavOutcome::Updated;
                        }
                    }
                }
                NavOutcome::Unchanged
            }
            NavEvent::Collapse => {
                if let Some(active) = self.active.as_deref() {
                    if self.expanded.remove(active) {
                        return NavOutcome::Updated;
                    }
                }
                NavOutcome::Unchanged
            }
            NavEvent::Activate => match self.active.clone() {
                Some(active) => NavOutcome::Toggled(active),
                None => NavOutcome::Unchanged,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyEventKind, Modifiers};
    use crate::tree::TreeData;

    #[test]
    fn move_down_from_nothing_selects_first_root() {
        let tree = TreeData::sample_tree1();
        let mut nav = NavState::new();
        assert_eq!(nav.apply(&tree, NavEvent::MoveDown), NavOutcome::Updated);
        assert_eq!(nav.active(), Some("0-0"));
        assert!(nav.expanded().is_empty());
    }

    #[test]
    fn move_down_expands_before_descending() {
        let tree = TreeData::sample_tree1();
        let mut nav = NavState::new();
        nav.apply(&tree, NavEvent::MoveDown);
        // Second move-down: "0-0" has children and is unexpanded.
        assert_eq!(nav.apply(&tree, NavEvent::MoveDown), NavOutcome::Updated);
        assert_eq!(nav.active(), Some("0-0"));
        assert!(nav.expanded().contains("0-0"));
        // Third move-down: now expanded, cursor advances to the first child.
        assert_eq!(nav.apply(&tree, NavEvent::MoveDown), NavOutcome::Updated);
        assert_eq!(nav.active(), Some("0-0-0"));
    }

    #[test]
    fn move_down_stops_at_end_of_visible_sequence() {
        let tree = TreeData::sample_tree2();
        let mut nav = NavState::new();
        nav.apply(&tree, NavEvent::MoveDown); // a-0
        nav.apply(&tree, NavEvent::MoveDown); // expand a-0
        for _ in 0..4 {
            nav.apply(&tree, NavEvent::MoveDown);
        }
        // b-0 is last visible (its children are collapsed).
        assert_eq!(nav.active(), Some("b-0"));
        assert_eq!(nav.apply(&tree, NavEvent::MoveDown), NavOutcome::Updated);
        assert!(nav.expanded().contains("b-0"));
        nav.apply(&tree, NavEvent::MoveDown);
        nav.apply(&tree, NavEvent::MoveDown);
        assert_eq!(nav.active(), Some("b-0-1"));
        assert_eq!(nav.apply(&tree, NavEvent::MoveDown), NavOutcome::Unchanged);
    }

    #[test]
    fn move_up_walks_back_and_stops_at_top() {
        let tree = TreeData::sample_tree1();
        let mut nav = NavState::new();
        nav.apply(&tree, NavEvent::MoveDown);
        nav.apply(&tree, NavEvent::MoveDown);
        nav.apply(&tree, NavEvent::MoveDown);
        assert_eq!(nav.active(), Some("0-0-0"));
        assert_eq!(nav.apply(&tree, NavEvent::MoveUp), NavOutcome::Updated);
        assert_eq!(nav.active(), Some("0-0"));
        assert_eq!(nav.apply(&tree, NavEvent::MoveUp), NavOutcome::Unchanged);
        assert_eq!(nav.active(), Some("0-0"));
    }

    #[test]
    fn move_up_never_collapses() {
        let tree = TreeData::sample_tree1();
        let mut nav = NavState::new();
        nav.apply(&tree, NavEvent::MoveDown);
        nav.apply(&tree, NavEvent::MoveDown); // expand 0-0
        nav.apply(&tree, NavEvent::MoveUp);
        assert!(nav.expanded().contains("0-0"));
    }

    #[test]
    fn expand_and_collapse_toggle_visibility() {
        let tree = TreeData::sample_tree1();
        let mut nav = NavState::new();
        nav.apply(&tree, NavEvent::MoveDown);
        assert_eq!(nav.apply(&tree, NavEvent::Expand), NavOutcome::Updated);
        assert!(nav.expanded().contains("0-0"));
        // Expanding an already-expanded node is a no-op.
        assert_eq!(nav.apply(&tree, NavEvent::Expand), NavOutcome::Unchanged);
        assert_eq!(nav.apply(&tree, NavEvent::Collapse), NavOutcome::Updated);
        assert!(!nav.expanded().contains("0-0"));
        assert_eq!(nav.apply(&tree, NavEvent::Collapse), NavOutcome::Unchanged);
    }

    #[test]
    fn expand_on_leaf_is_noop() {
        let tree = TreeData::sample_tree2();
        let mut nav = NavState::from_parts(
            ["a-0".to_string()].into(),
            Some("a-0-0".to_string()),
        );
        assert_eq!(nav.apply(&tree, NavEvent::Expand), NavOutcome::Unchanged);
    }

    #[test]
    fn activate_reports_key_and_keeps_cursor() {
        let tree = TreeData::sample_tree1();
        let mut nav = NavState::new();
        nav.apply(&tree, NavEvent::MoveDown);
        let outcome = nav.apply(&tree, NavEvent::Activate);
        assert_eq!(outcome, NavOutcome::Toggled("0-0".to_string()));
        assert_eq!(nav.active(), Some("0-0"));
    }

    #[test]
    fn activate_without_cursor_is_noop() {
        let tree = TreeData::sample_tree1();
        let mut nav = NavState::new();
        assert_eq!(nav.apply(&tree, NavEvent::Activate), NavOutcome::Unchanged);
    }

    #[test]
    fn stale_active_key_is_noop() {
        let tree = TreeData::sample_tree1();
        let mut nav = NavState::from_parts(HashSet::new(), Some("gone".to_string()));
        assert_eq!(nav.apply(&tree, NavEvent::MoveDown), NavOutcome::Unchanged);
        assert_eq!(nav.apply(&tree, NavEvent::MoveUp), NavOutcome::Unchanged);
        assert_eq!(nav.apply(&tree, NavEvent::Expand), NavOutcome::Unchanged);
    }

    #[test]
    fn empty_tree_move_down_is_noop() {
        let tree = TreeData::new(Vec::new());
        let mut nav = NavState::new();
        assert_eq!(nav.apply(&tree, NavEvent::MoveDown), NavOutcome::Unchanged);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn set_active_rejects_unknown_keys() {
        let tree = TreeData::sample_tree1();
        let mut nav = NavState::new();
        nav.set_active(&tree, Some("0-1".to_string()));
        assert_eq!(nav.active(), Some("0-1"));
        nav.set_active(&tree, Some("nope".to_string()));
        assert_eq!(nav.active(), Some("0-1"));
        nav.set_active(&tree, None);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn key_mapping_covers_the_bindings() {
        let press = |code| KeyEvent::new(code);
        assert_eq!(NavEvent::from_key(&press(KeyCode::Down)), Some(NavEvent::MoveDown));
        assert_eq!(NavEvent::from_key(&press(KeyCode::Up)), Some(NavEvent::MoveUp));
        assert_eq!(NavEvent::from_key(&press(KeyCode::Right)), Some(NavEvent::Expand));
        assert_eq!(NavEvent::from_key(&press(KeyCode::Left)), Some(NavEvent::Collapse));
        assert_eq!(
            NavEvent::from_key(&press(KeyCode::Char(' '))),
            Some(NavEvent::Activate)
        );
        assert_eq!(NavEvent::from_key(&press(KeyCode::Enter)), Some(NavEvent::Activate));
        assert_eq!(NavEvent::from_key(&press(KeyCode::Char('x'))), None);
        let release = KeyEvent::new(KeyCode::Down)
            .with_modifiers(Modifiers::NONE)
            .with_kind(KeyEventKind::Release);
        assert_eq!(NavEvent::from_key(&release), None);
    }
}

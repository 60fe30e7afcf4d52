#![forbid(unsafe_code)]

//! The state-container seam.
//!
//! A [`StateContainer`] stores and redistributes per-tree state and does
//! nothing else: reads hand out whole values, writes replace whole values.
//! All selection and navigation logic stays in `treetabs-core`; any
//! container holding these three fields per tree is interchangeable with
//! any other.

use std::collections::HashSet;

/// Identifies one of the two independent trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeId {
    /// The first tree ("Parent 1" / "Parent 2" dataset).
    Tree1,
    /// The second tree ("Node A" / "Node B" dataset).
    Tree2,
}

impl TreeId {
    /// Both tree identifiers, in tab order.
    pub const ALL: [TreeId; 2] = [TreeId::Tree1, TreeId::Tree2];
}

/// The stored state of one tree: checked keys, expanded keys, and the
/// cursor key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeSlot {
    /// Keys checked by the selection engine.
    pub checked: HashSet<String>,
    /// Keys whose children are visible.
    pub expanded: HashSet<String>,
    /// The cursor key, if any.
    pub active: Option<String>,
}

/// Storage seam between the core logic and whatever hosts the state.
///
/// Implementations must not derive or transform values; they store what
/// they are given and return it unchanged.
pub trait StateContainer {
    /// Read the current state of a tree.
    fn slot(&self, id: TreeId) -> TreeSlot;

    /// Replace a tree's checked-key set.
    fn set_checked(&mut self, id: TreeId, keys: HashSet<String>);

    /// Replace a tree's expanded-key set.
    fn set_expanded(&mut self, id: TreeId, keys: HashSet<String>);

    /// Replace a tree's cursor key.
    fn set_active(&mut self, id: TreeId, key: Option<String>);
}

/// Plain two-slot storage shared by the container implementations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeSlots {
    tree1: TreeSlot,
    tree2: TreeSlot,
}

impl TreeSlots {
    /// Borrow the slot for `id`.
    #[must_use]
    pub fn get(&self, id: TreeId) -> &TreeSlot {
        match id {
            TreeId::Tree1 => &self.tree1,
            TreeId::Tree2 => &self.tree2,
        }
    }

    /// Mutably borrow the slot for `id`.
    pub fn get_mut(&mut self, id: TreeId) -> &mut TreeSlot {
        match id {
            TreeId::Tree1 => &mut self.tree1,
            TreeId::Tree2 => &mut self.tree2,
        }
    }
}

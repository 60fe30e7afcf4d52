#![forbid(unsafe_code)]

//! Tri-state selection engine.
//!
//! [`toggle`] computes the next checked-key set after a node is checked or
//! unchecked, keeping the tri-state invariant: a parent is checked iff all
//! of its direct children are checked. Toggling a key flips the key and its
//! whole subtree, then re-evaluates the ancestor chain nearest-first so
//! each ancestor's decision sees the already-finalized state of the levels
//! below it. Keys outside the toggled key's descendant/ancestor chain are
//! never touched.

use std::collections::HashSet;

use crate::tree::{TreeData, TreeNode};

/// Compute the checked-key set after toggling `key`.
///
/// A key absent from the tree is a no-op and returns a clone of the input.
/// The operation is deterministic. Toggling the same key twice with no
/// intervening operations restores the original set whenever the key's
/// subtree was uniformly checked or unchecked, which is always the case
/// for leaves; a mixed subtree is first unified by the check.
#[must_use]
pub fn toggle(tree: &TreeData, checked: &HashSet<String>, key: &str) -> HashSet<String> {
    let Some(node) = tree.find(key) else {
        crate::debug!(key, "toggle ignored: key not in tree");
        return checked.clone();
    };

    let mut next = checked.clone();
    if next.contains(key) {
        next.remove(key);
        for descendant in node.descendant_keys() {
            next.remove(descendant);
        }
    } else {
        next.insert(key.to_string());
        for descendant in node.descendant_keys() {
            next.insert(descendant.to_string());
        }
    }

    // Nearest-first: walk from the immediate parent out to the root, so
    // each ancestor sees the levels below it already decided.
    let ancestors = tree.ancestor_path(key);
    for ancestor_key in ancestors.into_iter().rev() {
        let Some(ancestor) = tree.find(ancestor_key) else {
            continue;
        };
        let all_children_checked = ancestor
            .children()
            .iter()
            .all(|child| next.contains(child.key()));
        if all_children_checked {
            next.insert(ancestor_key.to_string());
        } else {
            next.remove(ancestor_key);
        }
    }

    crate::trace!(key, checked = next.len(), "toggle applied");
    next
}

/// Verify the tri-state invariant over the whole tree: every checked
/// interior node has all of its direct children checked, and every
/// interior node with all children checked is itself checked.
#[must_use]
pub fn is_consistent(tree: &TreeData, checked: &HashSet<String>) -> bool {
    fn check(node: &TreeNode, checked: &HashSet<String>) -> bool {
        if !node.is_leaf() {
            let all = node
                .children()
                .iter()
                .all(|child| checked.contains(child.key()));
            if checked.contains(node.key()) != all {
                return false;
            }
        }
        node.children().iter().all(|child| check(child, checked))
    }
    tree.roots().iter().all(|root| check(root, checked))
}

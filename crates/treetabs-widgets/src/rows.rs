#![forbid(unsafe_code)]

//! Flat row projection of a tree's visible state.

use std::collections::HashSet;

use treetabs_core::nav::NavState;
use treetabs_core::tree::TreeData;

/// One visible node, ready for rendering.
///
/// Checked status is binary: it is exactly the selection engine's output
/// for this key, with no separately tracked indeterminate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    /// The node's key.
    pub key: String,
    /// Display title.
    pub title: String,
    /// Depth in the tree; roots are 0.
    pub depth: usize,
    /// Whether the node has children.
    pub is_branch: bool,
    /// Whether the node's children are currently visible.
    pub expanded: bool,
    /// Whether the key is in the checked set.
    pub checked: bool,
    /// Whether this is the cursor node.
    pub active: bool,
}

/// Project the visible nodes of `tree` into render-ready rows.
#[must_use]
pub fn render_rows(tree: &TreeData, nav: &NavState, checked: &HashSet<String>) -> Vec<TreeRow> {
    tree.flatten_visible(nav.expanded())
        .into_iter()
        .map(|flat| {
            let key = flat.node.key();
            TreeRow {
                key: key.to_string(),
                title: flat.node.title().to_string(),
                depth: flat.depth,
                is_branch: !flat.node.is_leaf(),
                expanded: nav.expanded().contains(key),
                checked: checked.contains(key),
                active: nav.active() == Some(key),
            }
        })
        .collect()
}

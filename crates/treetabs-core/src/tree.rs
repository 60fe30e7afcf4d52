#![forbid(unsafe_code)]

//! Immutable tree datasets and pure query helpers.
//!
//! A [`TreeData`] is an ordered forest of [`TreeNode`]s with unique keys.
//! All queries are read-only; a key absent from the tree yields `None` or
//! an empty result, never a panic. Walks are recursive and place no bound
//! on depth.
//!
//! # Example
//!
//! ```
//! use treetabs_core::tree::{TreeData, TreeNode};
//!
//! let tree = TreeData::new(vec![
//!     TreeNode::new("a", "A").child(TreeNode::new("a-1", "A one")),
//!     TreeNode::new("b", "B"),
//! ]);
//!
//! assert_eq!(tree.find("a-1").map(|n| n.title()), Some("A one"));
//! assert!(tree.find("missing").is_none());
//! ```

use std::collections::HashSet;

/// A node in the tree hierarchy.
///
/// Immutable after construction: `key` is unique within its tree, `title`
/// is the display label (irrelevant to the algorithms), and `children` is
/// an ordered, possibly empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    key: String,
    title: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a new leaf node with the given key and display title.
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Add a child node.
    #[must_use]
    pub fn child(mut self, node: TreeNode) -> Self {
        self.children.push(node);
        self
    }

    /// Set children from a vec.
    #[must_use]
    pub fn with_children(mut self, nodes: Vec<TreeNode>) -> Self {
        self.children = nodes;
        self
    }

    /// Get the key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the children.
    #[must_use]
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Whether this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// All keys reachable via `children`, excluding this node, pre-order.
    #[must_use]
    pub fn descendant_keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        collect_descendants(self, &mut keys);
        keys
    }
}

fn collect_descendants<'a>(node: &'a TreeNode, out: &mut Vec<&'a str>) {
    for child in &node.children {
        out.push(child.key());
        collect_descendants(child, out);
    }
}

/// One entry of the flattened visible sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatNode<'a> {
    /// The visible node.
    pub node: &'a TreeNode,
    /// Depth in the tree; roots are depth 0.
    pub depth: usize,
}

/// An ordered forest of [`TreeNode`]s with unique keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeData {
    roots: Vec<TreeNode>,
}

impl TreeData {
    /// Create a tree from its root nodes, in declaration order.
    #[must_use]
    pub fn new(roots: Vec<TreeNode>) -> Self {
        Self { roots }
    }

    /// The root-level nodes.
    #[must_use]
    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Find a node by key, depth-first.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&TreeNode> {
        find_in(&self.roots, key)
    }

    /// Whether the tree contains the given key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Keys from the root down to the immediate parent of `key`.
    ///
    /// Empty for root keys and for keys absent from the tree.
    #[must_use]
    pub fn ancestor_path(&self, key: &str) -> Vec<&str> {
        let mut path = Vec::new();
        if find_path(&self.roots, key, &mut path) {
            path
        } else {
            Vec::new()
        }
    }

    /// Pre-order traversal descending only into nodes whose key is in
    /// `expanded`. Collapsed subtrees are omitted entirely.
    #[must_use]
    pub fn flatten_visible(&self, expanded: &HashSet<String>) -> Vec<FlatNode<'_>> {
        let mut out = Vec::new();
        for root in &self.roots {
            flatten_into(root, 0, expanded, &mut out);
        }
        out
    }

    /// Every key in the tree, pre-order.
    #[must_use]
    pub fn all_keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        for root in &self.roots {
            keys.push(root.key());
            collect_descendants(root, &mut keys);
        }
        keys
    }

    /// First demonstration dataset ("Parent 1" / "Parent 2").
    #[must_use]
    pub fn sample_tree1() -> Self {
        Self::new(vec![
            TreeNode::new("0-0", "Parent 1")
                .child(
                    TreeNode::new("0-0-0", "Child 1-1")
                        .child(TreeNode::new("0-0-0-0", "Grandchild 1-1-1"))
                        .child(TreeNode::new("0-0-0-1", "Grandchild 1-1-2")),
                )
                .child(TreeNode::new("0-0-1", "Child 1-2")),
            TreeNode::new("0-1", "Parent 2")
                .child(TreeNode::new("0-1-0", "Child 2-1"))
                .child(TreeNode::new("0-1-1", "Child 2-2")),
        ])
    }

    /// Second demonstration dataset ("Node A" / "Node B").
    #[must_use]
    pub fn sample_tree2() -> Self {
        Self::new(vec![
            TreeNode::new("a-0", "Node A")
                .child(TreeNode::new("a-0-0", "Node A-1"))
                .child(TreeNode::new("a-0-1", "Node A-2")),
            TreeNode::new("b-0", "Node B")
                .child(TreeNode::new("b-0-0", "Node B-1"))
                .child(TreeNode::new("b-0-1", "Node B-2")),
        ])
    }
}

fn find_in<'a>(nodes: &'a [TreeNode], key: &str) -> Option<&'a TreeNode> {
    for node in nodes {
        if node.key() == key {
            return Some(node);
        }
        if let Some(found) = find_in(&node.children, key) {
            return Some(found);
        }
    }
    None
}

/// Depth-first search for `key`, recording the keys of the nodes above
/// it in `path`. Returns whether the key was found.
fn find_path<'a>(nodes: &'a [TreeNode], key: &str, path: &mut Vec<&'a str>) -> bool {
    for node in nodes {
        if node.key() == key {
            return true;
        }
        path.push(node.key());
        if find_path(&node.children, key, path) {
            return true;
        }
        path.pop();
    }
    false
}

fn flatten_into<'a>(
    node: &'a TreeNode,
    depth: usize,
    expanded: &HashSet<String>,
    out: &mut Vec<FlatNode<'a>>,
) {
    out.push(FlatNode { node, depth });
    if expanded.contains(node.key()) {
        for child in &node.children {
            flatten_into(child, depth + 1, expanded, out);
        }
    }
}

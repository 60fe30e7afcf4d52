#![forbid(unsafe_code)]

//! Guide-character text rendering of a checkable tree.
//!
//! Produces one [`StyledLine`] per visible node: guide characters for the
//! hierarchy, a `[x]`/`[ ]` checkbox mark, and the node title. The active
//! row is flagged on the line itself rather than through any ambient style
//! state, so hosts decide how to highlight it.

use std::collections::HashSet;

use treetabs_core::nav::NavState;
use treetabs_core::tree::{TreeData, TreeNode};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Guide character styles for tree rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeGuides {
    /// ASCII guides: `|`, `+--`, `` `-- ``.
    Ascii,
    /// Unicode box-drawing characters (default).
    #[default]
    Unicode,
}

impl TreeGuides {
    /// Vertical continuation (item has siblings below).
    #[must_use]
    pub const fn vertical(&self) -> &str {
        match self {
            Self::Ascii => "|   ",
            Self::Unicode => "\u{2502}   ",
        }
    }

    /// Branch guide (item has siblings below).
    #[must_use]
    pub const fn branch(&self) -> &str {
        match self {
            Self::Ascii => "+-- ",
            Self::Unicode => "\u{251C}\u{2500}\u{2500} ",
        }
    }

    /// Last-item guide (no siblings below).
    #[must_use]
    pub const fn last(&self) -> &str {
        match self {
            Self::Ascii => "`-- ",
            Self::Unicode => "\u{2514}\u{2500}\u{2500} ",
        }
    }

    /// Empty indentation (no guide needed).
    #[must_use]
    pub const fn space(&self) -> &str {
        "    "
    }
}

/// One rendered line plus its highlight flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    /// The rendered text, truncated to the requested width.
    pub text: String,
    /// Whether this is the cursor row.
    pub active: bool,
}

/// Render the visible tree as guide-decorated text lines.
///
/// Lines wider than `max_width` columns are truncated on a grapheme
/// boundary. A `max_width` of 0 yields empty line texts.
#[must_use]
pub fn render_lines(
    tree: &TreeData,
    nav: &NavState,
    checked: &HashSet<String>,
    guides: TreeGuides,
    max_width: usize,
) -> Vec<StyledLine> {
    let mut out = Vec::new();
    let mut is_last = Vec::new();
    let root_count = tree.roots().len();
    for (i, root) in tree.roots().iter().enumerate() {
        is_last.push(i == root_count - 1);
        render_node(root, 0, &mut is_last, nav, checked, guides, max_width, &mut out);
        is_last.pop();
    }
    out
}

#[allow(clippy::too_many_arguments)]
fn render_node(
    node: &TreeNode,
    depth: usize,
    is_last: &mut Vec<bool>,
    nav: &NavState,
    checked: &HashSet<String>,
    guides: TreeGuides,
    max_width: usize,
    out: &mut Vec<StyledLine>,
) {
    let mut text = String::new();
    // Roots carry no guide prefix; deeper levels draw one segment per
    // ancestor, with the immediate parent level showing the branch shape.
    for d in 1..=depth {
        let last_at_depth = is_last.get(d).copied().unwrap_or(false);
        let guide = if d == depth {
            if last_at_depth {
                guides.last()
            } else {
                guides.branch()
            }
        } else if last_at_depth {
            guides.space()
        } else {
            guides.vertical()
        };
        text.push_str(guide);
    }

    text.push_str(if checked.contains(node.key()) {
        "[x] "
    } else {
        "[ ] "
    });
    text.push_str(node.title());

    out.push(StyledLine {
        text: truncate_to_width(&text, max_width),
        active: nav.active() == Some(node.key()),
    });

    if !nav.expanded().contains(node.key()) {
        return;
    }

    let child_count = node.children().len();
    for (i, child) in node.children().iter().enumerate() {
        is_last.push(i == child_count - 1);
        render_node(child, depth + 1, is_last, nav, checked, guides, max_width, out);
        is_last.pop();
    }
}

/// Cut `text` at the last grapheme boundary that fits in `max` columns.
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w > max {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out
}

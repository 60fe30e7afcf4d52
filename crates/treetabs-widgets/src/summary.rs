#![forbid(unsafe_code)]

//! Read-only selection summary projection.

use std::collections::HashSet;

use treetabs_core::tree::TreeData;

/// One checked key, resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    /// Display title; falls back to the key when the key is no longer in
    /// the tree.
    pub title: String,
    /// Select-option value (the key).
    pub value: String,
    /// The checked key.
    pub key: String,
}

/// Convert a checked-key set into display entries.
///
/// Keys present in the tree come first, in the tree's pre-order; stale
/// keys follow in lexicographic order so the output is deterministic.
#[must_use]
pub fn summarize(tree: &TreeData, checked: &HashSet<String>) -> Vec<SummaryEntry> {
    let mut entries = Vec::with_capacity(checked.len());
    let mut seen = HashSet::new();

    for key in tree.all_keys() {
        if checked.contains(key) {
            // all_keys never repeats within a valid tree
            seen.insert(key.to_string());
            let title = tree
                .find(key)
                .map_or_else(|| key.to_string(), |node| node.title().to_string());
            entries.push(SummaryEntry {
                title,
                value: key.to_string(),
                key: key.to_string(),
            });
        }
    }

    let mut stale: Vec<&String> = checked.iter().filter(|k| !seen.contains(*k)).collect();
    stale.sort();
    for key in stale {
        entries.push(SummaryEntry {
            title: key.clone(),
            value: key.clone(),
            key: key.clone(),
        });
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use treetabs_core::selection::toggle;

    #[test]
    fn entries_follow_tree_pre_order() {
        let tree = TreeData::sample_tree1();
        let checked = toggle(&tree, &HashSet::new(), "0-0");
        let summary = summarize(&tree, &checked);
        let keys: Vec<&str> = summary.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["0-0", "0-0-0", "0-0-0-0", "0-0-0-1", "0-0-1"]);
        assert_eq!(summary[0].title, "Parent 1");
        assert_eq!(summary[0].value, "0-0");
    }

    #[test]
    fn stale_keys_fall_back_to_key_as_title() {
        let tree = TreeData::sample_tree2();
        let checked: HashSet<String> =
            ["a-0-0".to_string(), "zz-gone".to_string(), "aa-gone".to_string()].into();
        let summary = summarize(&tree, &checked);
        let titles: Vec<&str> = summary.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Node A-1", "aa-gone", "zz-gone"]);
    }

    #[test]
    fn empty_selection_is_an_empty_summary() {
        let tree = TreeData::sample_tree1();
        assert!(summarize(&tree, &HashSet::new()).is_empty());
    }
}

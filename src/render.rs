//! Text rendering of trees, listings and breadcrumbs.

use itertools::Itertools;

use fldr_core::{FolderNode, TreeStats};
use fldr_ops::{Crumb, FolderEntry};

/// Render a subtree, root first, one folder per line.
pub fn tree_lines(root: &FolderNode) -> Vec<String> {
    root.walk()
        .map(|(depth, node)| {
            let marker = if node.has_children() { "▼ " } else { "  " };
            format!("{}{}{}", "  ".repeat(depth), marker, display_name(&node.name))
        })
        .collect()
}

/// Render the folders below `root` as indented text that parses back into the
/// same structure with the given indent unit.
pub fn indented_text(root: &FolderNode, indent_unit: usize) -> String {
    root.walk()
        .skip(1)
        .map(|(depth, node)| format!("{}{}", " ".repeat((depth - 1) * indent_unit), node.name))
        .join("\n")
}

/// Render the current folder listing, numbered from 1.
pub fn listing_lines(entries: &[FolderEntry]) -> Vec<String> {
    if entries.is_empty() {
        return vec!["  (empty)".to_string()];
    }
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{:>3}. [{}] {}{}",
                i + 1,
                if entry.selected { 'x' } else { ' ' },
                display_name(&entry.name),
                if entry.has_children { "/" } else { "" }
            )
        })
        .collect()
}

/// Render a breadcrumb path as `[0] root > [1] child`.
pub fn breadcrumb_line(crumbs: &[Crumb]) -> String {
    crumbs
        .iter()
        .map(|c| format!("[{}] {}", c.index, display_name(&c.name)))
        .join(" > ")
}

/// One-line summary of tree statistics.
pub fn stats_line(stats: &TreeStats) -> String {
    format!(
        "{} folders ({} empty), max depth {}",
        stats.total_folders, stats.leaf_folders, stats.max_depth
    )
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "<unnamed>" } else { name }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fldr_core::NodeId;

    fn sample() -> FolderNode {
        let mut root = FolderNode::new("root");
        root.add_child(FolderNode::new("a"))
            .add_child(FolderNode::new("b"));
        root.add_child(FolderNode::new(""));
        root
    }

    #[test]
    fn test_tree_lines() {
        let lines = tree_lines(&sample());
        assert_eq!(lines, ["▼ root", "  ▼ a", "      b", "    <unnamed>"]);
    }

    #[test]
    fn test_indented_text() {
        assert_eq!(indented_text(&sample(), 1), "a\n b\n");
        assert_eq!(indented_text(&sample(), 2), "a\n  b\n");
    }

    #[test]
    fn test_listing_lines() {
        let entries = vec![FolderEntry {
            id: NodeId::new(1),
            name: "docs".into(),
            has_children: true,
            selected: true,
        }];
        assert_eq!(listing_lines(&entries), ["  1. [x] docs/"]);
        assert_eq!(listing_lines(&[]), ["  (empty)"]);
    }

    #[test]
    fn test_breadcrumb_line() {
        let crumbs = vec![
            Crumb {
                index: 0,
                id: NodeId::new(1),
                name: "Main".into(),
            },
            Crumb {
                index: 1,
                id: NodeId::new(2),
                name: "X".into(),
            },
        ];
        assert_eq!(breadcrumb_line(&crumbs), "[0] Main > [1] X");
    }
}

//! Folder tree container and statistics.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::error::FolderError;
use crate::node::{FolderNode, NodeId};

/// Summary statistics for a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Number of folders below the root.
    pub total_folders: u64,
    /// Number of folders with no children (root excluded).
    pub leaf_folders: u64,
    /// Deepest level reached; the root's children are at depth 1.
    pub max_depth: u32,
}

impl TreeStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a folder at the given depth.
    pub fn record_folder(&mut self, depth: u32, is_leaf: bool) {
        self.total_folders += 1;
        if is_leaf {
            self.leaf_folders += 1;
        }
        self.max_depth = self.max_depth.max(depth);
    }
}

/// A rooted folder hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderTree {
    /// Root node of the tree.
    pub root: FolderNode,
}

impl FolderTree {
    /// Create a tree with an empty root of the given name.
    pub fn new(root_name: impl Into<CompactString>) -> Self {
        Self {
            root: FolderNode::new(root_name),
        }
    }

    /// Id of the root node.
    pub fn root_id(&self) -> NodeId {
        self.root.id
    }

    /// Find a node anywhere in the tree.
    pub fn get(&self, id: NodeId) -> Result<&FolderNode, FolderError> {
        self.root.find(id).ok_or(FolderError::NodeNotFound { id })
    }

    /// Find a node anywhere in the tree, mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut FolderNode, FolderError> {
        self.root.find_mut(id).ok_or(FolderError::NodeNotFound { id })
    }

    /// Check whether a node with this id is in the tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.root.contains(id)
    }

    /// Follow a chain of names from the root, first match at every level.
    pub fn resolve_names<S: AsRef<str>>(&self, names: &[S]) -> Option<&FolderNode> {
        names
            .iter()
            .try_fold(&self.root, |node, name| node.find_child_by_name(name.as_ref()))
    }

    /// Compute statistics over the whole tree.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::new();
        for (depth, node) in self.root.walk().skip(1) {
            stats.record_folder(depth as u32, !node.has_children());
        }
        stats
    }

    /// Check if the root has no children.
    pub fn is_empty(&self) -> bool {
        !self.root.has_children()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_stats_default() {
        let stats = TreeStats::default();
        assert_eq!(stats.total_folders, 0);
        assert_eq!(stats.max_depth, 0);
    }

    #[test]
    fn test_tree_stats() {
        let mut tree = FolderTree::new("root");
        let a = tree.root.add_child(FolderNode::new("a"));
        a.add_child(FolderNode::new("a1")).add_child(FolderNode::new("a2"));
        tree.root.add_child(FolderNode::new("b"));

        let stats = tree.stats();
        assert_eq!(stats.total_folders, 4);
        assert_eq!(stats.leaf_folders, 2);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_resolve_names() {
        let mut tree = FolderTree::new("root");
        let a = tree.root.add_child(FolderNode::new("a"));
        let a1 = a.add_child(FolderNode::new("a1")).id;

        assert_eq!(tree.resolve_names(&["a", "a1"]).map(|n| n.id), Some(a1));
        assert!(tree.resolve_names(&["a", "zz"]).is_none());
        let empty: [&str; 0] = [];
        assert_eq!(tree.resolve_names(&empty).map(|n| n.id), Some(tree.root_id()));
    }

    #[test]
    fn test_get_missing() {
        let tree = FolderTree::new("root");
        let id = NodeId::new(u64::MAX);
        assert_eq!(tree.get(id).unwrap_err(), FolderError::NodeNotFound { id });
    }
}

//! Folder node types.

use std::sync::atomic::{AtomicU64, Ordering};

use compact_str::CompactString;
use serde::{Deserialize, Deserializer, Serialize};

/// Process-wide source of node ids. Ids are never reused.
static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a node.
///
/// Deserialized ids are reserved, so [`NodeId::next`] never hands them out
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Create a NodeId from a raw u64.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Allocate a fresh, never before issued id.
    pub fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Use an id issued elsewhere, advancing the counter past it.
    pub fn reserve(id: u64) -> Self {
        NEXT_NODE_ID.fetch_max(id.saturating_add(1), Ordering::Relaxed);
        Self(id)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u64::deserialize(deserializer).map(Self::reserve)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single folder in the tree.
///
/// Each node is owned by its parent's `children`; there is no back-pointer.
///
/// `Clone` keeps every id, so a clone is a snapshot and must not be inserted
/// next to its original. Use [`deep_clone`](Self::deep_clone) for a copy that
/// goes into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Unique identifier, fixed at creation.
    pub id: NodeId,

    /// Display name. May be empty.
    pub name: CompactString,

    /// Child folders in insertion order.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Create a new folder with a fresh id and no children.
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            id: NodeId::next(),
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Rename this folder in place.
    pub fn rename(&mut self, name: impl Into<CompactString>) {
        self.name = name.into();
    }

    /// Append a child and return a mutable reference to it.
    pub fn add_child(&mut self, child: FolderNode) -> &mut FolderNode {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Remove the first direct child with the given id.
    ///
    /// Returns `None` when no such child exists.
    pub fn remove_child(&mut self, id: NodeId) -> Option<FolderNode> {
        let pos = self.children.iter().position(|c| c.id == id)?;
        Some(self.children.remove(pos))
    }

    /// Remove the node with the given id from anywhere below `self`.
    ///
    /// `self` itself is never removed.
    pub fn remove_descendant(&mut self, id: NodeId) -> Option<FolderNode> {
        if let Some(removed) = self.remove_child(id) {
            return Some(removed);
        }
        self.children
            .iter_mut()
            .find_map(|c| c.remove_descendant(id))
    }

    /// First direct child whose name equals `name` exactly.
    pub fn find_child_by_name(&self, name: &str) -> Option<&FolderNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Mutable variant of [`find_child_by_name`](Self::find_child_by_name).
    pub fn find_child_by_name_mut(&mut self, name: &str) -> Option<&mut FolderNode> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// Direct child with the given id.
    pub fn child(&self, id: NodeId) -> Option<&FolderNode> {
        self.children.iter().find(|c| c.id == id)
    }

    /// Find a node anywhere in this subtree (including `self`).
    pub fn find(&self, id: NodeId) -> Option<&FolderNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut FolderNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Check whether `id` is this node or one of its descendants.
    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Ids of this node and every descendant, pre-order.
    pub fn descendant_ids(&self) -> Vec<NodeId> {
        self.walk().map(|(_, node)| node.id).collect()
    }

    /// Copy this subtree, giving every copied node a fresh id.
    pub fn deep_clone(&self) -> FolderNode {
        FolderNode {
            id: NodeId::next(),
            name: self.name.clone(),
            children: self.children.iter().map(FolderNode::deep_clone).collect(),
        }
    }

    /// Pre-order traversal yielding `(depth, node)`, with `self` at depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Check if this folder has any children.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Pre-order iterator over a subtree. See [`FolderNode::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a FolderNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a FolderNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}

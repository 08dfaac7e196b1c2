//! Current-directory cursor and breadcrumb path.
//!
//! The navigator holds ids rather than references, so it never borrows the
//! tree. Every access resolves the path `ancestors + [current]` from the root
//! downwards, one child lookup per level.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use fldr_core::{FolderError, FolderNode, FolderTree, NodeId};

/// One entry of the rendered breadcrumb path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    /// Index to pass to [`Navigator::navigate_to`].
    pub index: usize,
    /// Node this crumb points at.
    pub id: NodeId,
    /// Current display name of that node.
    pub name: CompactString,
}

/// Cursor over a [`FolderTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    root: NodeId,
    current: NodeId,
    /// Root first, excluding `current`.
    ancestors: Vec<NodeId>,
}

impl Navigator {
    /// Create a navigator positioned at the root.
    pub fn new(root: NodeId) -> Self {
        Self {
            root,
            current: root,
            ancestors: Vec::new(),
        }
    }

    /// The folder currently being viewed.
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Breadcrumb ids, root first, excluding the current folder.
    pub fn ancestors(&self) -> &[NodeId] {
        &self.ancestors
    }

    /// Number of `open` steps below the root.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Check if the current folder is the root.
    pub fn is_at_root(&self) -> bool {
        self.ancestors.is_empty()
    }

    /// Descend into `id`, which must be a child of the current folder.
    pub fn open(&mut self, tree: &FolderTree, id: NodeId) -> Result<(), FolderError> {
        let current = self.resolve(tree)?;
        if current.child(id).is_none() {
            return Err(FolderError::NotAChild {
                parent: current.id,
                child: id,
            });
        }
        self.ancestors.push(self.current);
        self.current = id;
        Ok(())
    }

    /// Jump to a breadcrumb by its index in `ancestors + [current]`.
    ///
    /// Index 0 is the root. An index naming the current folder, or past the
    /// end of the path, is ignored. Returns whether the position changed.
    pub fn navigate_to(&mut self, index: usize) -> bool {
        if index == 0 {
            let moved = !self.is_at_root();
            self.reset();
            return moved;
        }
        if index < self.ancestors.len() {
            self.current = self.ancestors[index];
            self.ancestors.truncate(index);
            return true;
        }
        false
    }

    /// Return to the root.
    pub fn reset(&mut self) {
        self.current = self.root;
        self.ancestors.clear();
    }

    /// Ids along the full path, root first, current last.
    fn path(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ancestors
            .iter()
            .copied()
            .chain(std::iter::once(self.current))
    }

    /// Resolve the current folder.
    pub fn resolve<'t>(&self, tree: &'t FolderTree) -> Result<&'t FolderNode, FolderError> {
        if tree.root.id != self.root {
            return Err(FolderError::NodeNotFound { id: self.root });
        }
        let mut node = &tree.root;
        for id in self.path().skip(1) {
            node = node.child(id).ok_or(FolderError::NodeNotFound { id })?;
        }
        Ok(node)
    }

    /// Resolve the current folder mutably.
    pub fn resolve_mut<'t>(
        &self,
        tree: &'t mut FolderTree,
    ) -> Result<&'t mut FolderNode, FolderError> {
        if tree.root.id != self.root {
            return Err(FolderError::NodeNotFound { id: self.root });
        }
        let mut node = &mut tree.root;
        for id in self.path().skip(1) {
            node = node
                .children
                .iter_mut()
                .find(|c| c.id == id)
                .ok_or(FolderError::NodeNotFound { id })?;
        }
        Ok(node)
    }

    /// Children of the current folder, for rendering.
    pub fn current_children<'t>(
        &self,
        tree: &'t FolderTree,
    ) -> Result<&'t [FolderNode], FolderError> {
        self.resolve(tree).map(|node| node.children.as_slice())
    }

    /// The rendered breadcrumb path: root first, current folder last.
    ///
    /// At the root this is a single crumb.
    pub fn breadcrumbs(&self, tree: &FolderTree) -> Vec<Crumb> {
        let mut crumbs = Vec::with_capacity(self.ancestors.len() + 1);
        let mut node = &tree.root;
        for (index, id) in self.path().enumerate() {
            if index > 0 {
                match node.child(id) {
                    Some(child) => node = child,
                    None => break,
                }
            }
            crumbs.push(Crumb {
                index,
                id: node.id,
                name: node.name.clone(),
            });
        }
        crumbs
    }

    /// Cut the path back to its deepest folder that still exists.
    ///
    /// Returns whether anything was pruned.
    pub fn revalidate(&mut self, tree: &FolderTree) -> bool {
        if tree.root.id != self.root {
            self.root = tree.root.id;
            self.reset();
            return true;
        }

        let path: Vec<NodeId> = self.path().collect();
        let mut node = &tree.root;
        let mut valid = 1;
        for &id in &path[1..] {
            match node.child(id) {
                Some(child) => {
                    node = child;
                    valid += 1;
                }
                None => break,
            }
        }

        if valid == path.len() {
            return false;
        }
        self.current = path[valid - 1];
        self.ancestors.truncate(valid - 1);
        true
    }
}

//! Paste-target selection.

use indexmap::IndexSet;

use fldr_core::NodeId;

/// Set of selected node ids, kept in selection order.
///
/// Membership does not depend on the navigator's position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: IndexSet<NodeId>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a node. Returns `true` if it was not already selected.
    pub fn add(&mut self, id: NodeId) -> bool {
        self.ids.insert(id)
    }

    /// Deselect a node. Returns `true` if it was selected.
    pub fn remove(&mut self, id: NodeId) -> bool {
        self.ids.shift_remove(&id)
    }

    /// Set membership from a checkbox-style signal.
    pub fn set(&mut self, id: NodeId, selected: bool) -> bool {
        if selected { self.add(id) } else { self.remove(id) }
    }

    /// Flip membership. Returns the new state.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.add(id);
            true
        }
    }

    /// Deselect every id in `ids`. Returns how many were selected.
    pub fn remove_all<I: IntoIterator<Item = NodeId>>(&mut self, ids: I) -> usize {
        ids.into_iter().filter(|id| self.remove(*id)).count()
    }

    /// Check if a node is selected.
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Number of selected nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in the order they were selected.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }
}

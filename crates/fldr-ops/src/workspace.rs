//! A folder tree together with its navigator and selection.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use tracing::debug;

use fldr_core::{FolderError, FolderNode, FolderTree, NodeId, WorkspaceConfig};

use crate::merge::{MergeEngine, MergeReport};
use crate::navigation::{Crumb, Navigator};
use crate::parse::{IndentParser, ParseReport};
use crate::selection::SelectionSet;

/// A rendered row of the current folder listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderEntry {
    /// Id of the listed folder.
    pub id: NodeId,
    /// Display name.
    pub name: CompactString,
    /// Whether the folder can be opened into something non-empty.
    pub has_children: bool,
    /// Whether the folder is a paste target.
    pub selected: bool,
}

/// One editing session over a folder tree.
///
/// A clipboard is simply a second `Workspace`; it never shares nodes with the
/// primary one. `Clone` keeps node ids, so a cloned workspace is a snapshot
/// of this one rather than an independent clipboard.
#[derive(Debug, Clone)]
pub struct Workspace {
    config: WorkspaceConfig,
    tree: FolderTree,
    navigator: Navigator,
    selection: SelectionSet,
    parser: IndentParser,
    merger: MergeEngine,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(WorkspaceConfig::default())
    }
}

impl Workspace {
    /// Create an empty workspace.
    pub fn new(config: WorkspaceConfig) -> Self {
        let tree = FolderTree::new(config.root_name.as_str());
        let navigator = Navigator::new(tree.root_id());
        let parser = IndentParser::new(config.parse.clone());
        Self {
            config,
            tree,
            navigator,
            selection: SelectionSet::new(),
            parser,
            merger: MergeEngine::new(),
        }
    }

    /// Create an empty clipboard workspace sharing `config`'s parse settings.
    pub fn clipboard(config: &WorkspaceConfig) -> Self {
        Self::new(config.for_clipboard())
    }

    /// The active configuration.
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// The folder tree.
    pub fn tree(&self) -> &FolderTree {
        &self.tree
    }

    /// The current folder and breadcrumb path.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The selected paste targets.
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// The folder currently being viewed.
    pub fn current(&self) -> &FolderNode {
        self.navigator.resolve(&self.tree).unwrap_or(&self.tree.root)
    }

    /// Children of the current folder.
    pub fn current_children(&self) -> &[FolderNode] {
        &self.current().children
    }

    /// Rows for the current folder listing.
    pub fn entries(&self) -> Vec<FolderEntry> {
        self.current_children()
            .iter()
            .map(|node| FolderEntry {
                id: node.id,
                name: node.name.clone(),
                has_children: node.has_children(),
                selected: self.selection.contains(node.id),
            })
            .collect()
    }

    /// The breadcrumb path, root first, current folder last.
    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        self.navigator.breadcrumbs(&self.tree)
    }

    /// Parse indented text into the current folder.
    pub fn create_from_text(&mut self, text: &str) -> ParseReport {
        self.navigator.revalidate(&self.tree);
        let current = match self.navigator.resolve_mut(&mut self.tree) {
            Ok(node) => node,
            Err(_) => &mut self.tree.root,
        };
        self.parser.parse_into(current, text)
    }

    /// Append a single folder to the current folder.
    ///
    /// Uses the configured default name when `name` is `None`.
    pub fn create_folder(&mut self, name: Option<&str>) -> NodeId {
        let name = name.unwrap_or(&self.config.default_folder_name).to_string();
        self.navigator.revalidate(&self.tree);
        let current = match self.navigator.resolve_mut(&mut self.tree) {
            Ok(node) => node,
            Err(_) => &mut self.tree.root,
        };
        current.add_child(FolderNode::new(name)).id
    }

    /// Descend into a child of the current folder.
    pub fn open_folder(&mut self, id: NodeId) -> Result<(), FolderError> {
        self.navigator.open(&self.tree, id)
    }

    /// Jump to a breadcrumb. See [`Navigator::navigate_to`].
    pub fn navigate_to(&mut self, index: usize) -> bool {
        self.navigator.navigate_to(index)
    }

    /// Mark a folder as a paste target.
    pub fn select(&mut self, id: NodeId) -> Result<bool, FolderError> {
        if !self.tree.contains(id) {
            return Err(FolderError::NodeNotFound { id });
        }
        Ok(self.selection.add(id))
    }

    /// Unmark a folder. Unknown ids are ignored.
    pub fn deselect(&mut self, id: NodeId) -> bool {
        self.selection.remove(id)
    }

    /// Checkbox-style selection signal.
    pub fn set_selected(&mut self, id: NodeId, selected: bool) -> Result<bool, FolderError> {
        if selected {
            self.select(id)
        } else {
            Ok(self.deselect(id))
        }
    }

    /// Delete a folder and its subtree.
    ///
    /// The folder and every descendant leave the selection, and navigation is
    /// pulled back if it was inside the deleted subtree. Returns `false` when
    /// the folder does not exist or is the root.
    pub fn delete_folder(&mut self, id: NodeId) -> bool {
        let Some(removed) = self.tree.root.remove_descendant(id) else {
            debug!(node_id = %id, "delete of missing folder ignored");
            return false;
        };

        let deselected = self.selection.remove_all(removed.descendant_ids());
        let moved = self.navigator.revalidate(&self.tree);
        debug!(
            node_id = %id,
            name = %removed.name,
            deselected,
            navigation_pruned = moved,
            "deleted folder"
        );
        true
    }

    /// Rename any folder in the tree, including the root.
    pub fn rename_folder(&mut self, id: NodeId, name: &str) -> Result<(), FolderError> {
        self.tree.get_mut(id)?.rename(name);
        Ok(())
    }

    /// Rename the root folder.
    pub fn rename_root(&mut self, name: &str) {
        self.tree.root.rename(name);
    }

    /// Merge the clipboard's tree into every selected folder, in selection order.
    pub fn paste_clipboard_into_selection(&mut self, clipboard: &Workspace) -> MergeReport {
        self.paste_into_selection(&clipboard.tree.root)
    }

    /// Merge `source`'s children into every selected folder.
    pub fn paste_into_selection(&mut self, source: &FolderNode) -> MergeReport {
        let targets: Vec<NodeId> = self.selection.iter().collect();
        self.merger.merge_into_all(&mut self.tree, targets, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_workspace_at_root() {
        let ws = Workspace::default();
        assert_eq!(ws.current().id, ws.tree().root_id());
        assert_eq!(ws.tree().root.name, "Main Directory");
        assert!(ws.entries().is_empty());

        let clip = Workspace::clipboard(ws.config());
        assert_eq!(clip.tree().root.name, "Paster Root");
    }

    #[test]
    fn test_create_folder_default_name() {
        let mut ws = Workspace::default();
        let id = ws.create_folder(None);
        let entries = ws.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, id);
        assert_eq!(entries[0].name, "New Folder");
    }

    #[test]
    fn test_create_from_text_goes_into_current() {
        let mut ws = Workspace::default();
        ws.create_from_text("a");
        let a = ws.entries()[0].id;
        ws.open_folder(a).unwrap();
        ws.create_from_text("b\n c");

        assert_eq!(ws.entries()[0].name, "b");
        assert!(ws.entries()[0].has_children);
        assert_eq!(ws.tree().root.child_count(), 1);
    }

    #[test]
    fn test_delete_ancestor_of_current_prunes_navigation() {
        let mut ws = Workspace::default();
        ws.create_from_text("a\n b");
        let a = ws.entries()[0].id;
        ws.open_folder(a).unwrap();
        let b = ws.entries()[0].id;
        ws.open_folder(b).unwrap();

        assert!(ws.delete_folder(a));
        assert!(ws.navigator().is_at_root());
        assert!(ws.entries().is_empty());
    }

    #[test]
    fn test_root_cannot_be_deleted() {
        let mut ws = Workspace::default();
        let root = ws.tree().root_id();
        assert!(!ws.delete_folder(root));
    }

    #[test]
    fn test_select_unknown_id_fails() {
        let mut ws = Workspace::default();
        let clip = Workspace::default();
        let foreign = clip.tree().root_id();
        assert!(ws.select(foreign).is_err());
        assert!(ws.selection().is_empty());
    }
}

//! Recursive name-keyed merge ("paste").
//!
//! For each child of the source, the first child of the target with the same
//! name is merged into recursively; when there is none, a deep copy with
//! fresh ids is appended. Merging only ever adds folders, and the source is
//! never modified.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use fldr_core::{FolderNode, FolderTree, NodeId};

/// Outcome of a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// Targets merged into.
    pub targets: usize,
    /// Targets that were no longer in the tree and were skipped.
    pub missing_targets: usize,
    /// Folders appended, counting every node of each copied subtree.
    pub created: usize,
    /// Source folders that matched an existing folder by name.
    pub matched: usize,
}

impl MergeReport {
    /// Check if the merge changed anything.
    pub fn is_noop(&self) -> bool {
        self.created == 0
    }
}

/// Folds a source subtree into target folders.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeEngine;

impl MergeEngine {
    /// Create a new merge engine.
    pub fn new() -> Self {
        Self
    }

    /// Merge the children of `source` into `target`.
    pub fn merge(&self, target: &mut FolderNode, source: &FolderNode) -> MergeReport {
        let mut report = MergeReport {
            targets: 1,
            ..MergeReport::default()
        };
        merge_children(target, source, &mut report);
        report
    }

    /// Merge `source` into every target in `tree`, in the given order.
    ///
    /// Targets not found in the tree are skipped.
    pub fn merge_into_all<I>(
        &self,
        tree: &mut FolderTree,
        targets: I,
        source: &FolderNode,
    ) -> MergeReport
    where
        I: IntoIterator<Item = NodeId>,
    {
        let mut report = MergeReport::default();
        if !source.has_children() {
            return report;
        }

        for id in targets {
            match tree.root.find_mut(id) {
                Some(target) => {
                    trace!(target_id = %id, "merging into target");
                    report.targets += 1;
                    merge_children(target, source, &mut report);
                }
                None => {
                    debug!(target_id = %id, "merge target no longer exists, skipping");
                    report.missing_targets += 1;
                }
            }
        }

        debug!(
            targets = report.targets,
            created = report.created,
            matched = report.matched,
            "merge complete"
        );
        report
    }
}

fn merge_children(target: &mut FolderNode, source: &FolderNode, report: &mut MergeReport) {
    for source_child in &source.children {
        match target.find_child_by_name_mut(&source_child.name) {
            Some(existing) => {
                report.matched += 1;
                merge_children(existing, source_child, report);
            }
            None => {
                let copy = source_child.deep_clone();
                report.created += copy.walk().count();
                target.add_child(copy);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, children: Vec<FolderNode>) -> FolderNode {
        let mut n = FolderNode::new(name);
        n.children = children;
        n
    }

    #[test]
    fn test_merge_into_empty_target_copies_everything() {
        let source = node("src", vec![node("a", vec![node("b", vec![])]), node("c", vec![])]);
        let mut target = FolderNode::new("t");

        let report = MergeEngine::new().merge(&mut target, &source);
        assert_eq!(report.created, 3);
        assert_eq!(report.matched, 0);
        assert_eq!(target.children[0].name, "a");
        assert_eq!(target.children[0].children[0].name, "b");
        assert_eq!(target.children[1].name, "c");
    }

    #[test]
    fn test_duplicate_source_siblings_fold_together() {
        let source = node(
            "src",
            vec![node("a", vec![node("x", vec![])]), node("a", vec![node("y", vec![])])],
        );
        let mut target = FolderNode::new("t");

        MergeEngine::new().merge(&mut target, &source);
        assert_eq!(target.child_count(), 1);
        let names: Vec<_> = target.children[0].children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["x", "y"]);
    }

    #[test]
    fn test_first_target_match_wins() {
        let source = node("src", vec![node("a", vec![node("x", vec![])])]);
        let mut target = node("t", vec![node("a", vec![]), node("a", vec![])]);

        MergeEngine::new().merge(&mut target, &source);
        assert_eq!(target.children[0].child_count(), 1);
        assert_eq!(target.children[1].child_count(), 0);
    }

    #[test]
    fn test_missing_targets_are_skipped() {
        let mut tree = FolderTree::new("root");
        let source = node("src", vec![node("a", vec![])]);
        let targets = [NodeId::new(u64::MAX), tree.root_id()];

        let report = MergeEngine::new().merge_into_all(&mut tree, targets, &source);
        assert_eq!(report.missing_targets, 1);
        assert_eq!(report.targets, 1);
        assert_eq!(tree.root.child_count(), 1);
    }
}

use fldr_core::{
    FolderError, FolderNode, FolderTree, MalformedIndentPolicy, NodeId, ParseConfig,
    ParseWarning, WarningKind, WorkspaceConfig,
};

#[test]
fn test_node_id_operations() {
    let id1 = NodeId::new(42);
    let id2 = NodeId::new(42);

    assert_eq!(id1, id2);
    assert_eq!(id1.0, 42);
    assert_eq!(id1.to_string(), "#42");

    // Fresh ids are strictly increasing
    let a = NodeId::next();
    let b = NodeId::next();
    assert!(b > a);
}

#[test]
fn test_folder_node_creation_and_rename() {
    let mut node = FolderNode::new("Projects");
    assert_eq!(node.name.as_str(), "Projects");
    assert_eq!(node.child_count(), 0);
    assert!(!node.has_children());

    let id = node.id;
    node.rename("");
    assert_eq!(node.name.as_str(), "");
    assert_eq!(node.id, id);
}

#[test]
fn test_add_and_remove_children_preserve_order() {
    let mut root = FolderNode::new("root");
    let a = root.add_child(FolderNode::new("a")).id;
    let b = root.add_child(FolderNode::new("b")).id;
    let c = root.add_child(FolderNode::new("c")).id;

    let removed = root.remove_child(b).unwrap();
    assert_eq!(removed.name.as_str(), "b");

    let ids: Vec<_> = root.children.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![a, c]);

    // Removing again is a no-op
    assert!(root.remove_child(b).is_none());
    assert_eq!(root.child_count(), 2);
}

#[test]
fn test_find_descendants() {
    let mut root = FolderNode::new("root");
    let deep = root
        .add_child(FolderNode::new("a"))
        .add_child(FolderNode::new("b"))
        .add_child(FolderNode::new("c"))
        .id;

    assert_eq!(root.find(deep).unwrap().name.as_str(), "c");
    root.find_mut(deep).unwrap().rename("renamed");
    assert_eq!(root.find(deep).unwrap().name.as_str(), "renamed");
    assert!(root.child(deep).is_none());
    assert_eq!(root.descendant_ids().len(), 4);
}

#[test]
fn test_deep_clone_is_independent() {
    let mut source = FolderNode::new("src");
    source.add_child(FolderNode::new("x")).add_child(FolderNode::new("y"));

    let mut copy = source.deep_clone();
    copy.children[0].rename("changed");

    assert_eq!(source.children[0].name.as_str(), "x");
    assert_ne!(copy.children[0].id, source.children[0].id);
    assert_ne!(copy.children[0].children[0].id, source.children[0].children[0].id);
}

#[test]
fn test_tree_serializes_to_json() {
    let mut tree = FolderTree::new("Main Directory");
    tree.root.add_child(FolderNode::new("Alpha"));

    let json = serde_json::to_string(&tree).unwrap();
    assert!(json.contains("\"Main Directory\""));
    assert!(json.contains("\"Alpha\""));

    let back: FolderTree = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn test_loaded_ids_are_never_reissued() {
    let json = r#"{"root":{"id":900000,"name":"root","children":[
        {"id":900001,"name":"a","children":[]}]}}"#;
    let mut tree: FolderTree = serde_json::from_str(json).unwrap();

    for _ in 0..8 {
        let fresh = FolderNode::new("fresh");
        assert!(fresh.id > NodeId::new(900001));
        tree.root.add_child(fresh);
    }

    let ids = tree.root.descendant_ids();
    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_reserve_advances_counter() {
    let reserved = NodeId::reserve(NodeId::next().0 + 50);
    assert!(NodeId::next() > reserved);
}

#[test]
fn test_tree_get_errors() {
    let tree = FolderTree::new("root");
    let missing = NodeId::new(0);
    assert!(matches!(
        tree.get(missing),
        Err(FolderError::NodeNotFound { .. })
    ));
    assert!(tree.get(tree.root_id()).is_ok());
    assert!(tree.is_empty());
}

#[test]
fn test_config_from_json_defaults() {
    let config: WorkspaceConfig =
        serde_json::from_str(r#"{"parse": {"malformed": "skip"}}"#).unwrap();
    assert_eq!(config.root_name, "Main Directory");
    assert_eq!(config.parse.indent_unit, 1);
    assert_eq!(config.parse.malformed, MalformedIndentPolicy::Skip);

    let bad: ParseConfig = serde_json::from_str(r#"{"indent_unit": 0}"#).unwrap();
    assert!(bad.validate().is_err());
}

#[test]
fn test_parse_warning_kinds() {
    let coerced = ParseWarning::new(1, " Beta", WarningKind::CoercedIndent);
    let skipped = ParseWarning::new(1, " Beta", WarningKind::SkippedIndent);
    assert!(coerced.message().contains("current level"));
    assert!(skipped.message().contains("skipped"));
}

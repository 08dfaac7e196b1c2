//! Core types for fldr.
//!
//! This crate provides the fundamental data structures shared by the fldr
//! crates: folder nodes, the rooted tree container, errors, and the parse and
//! workspace configuration.

mod config;
mod error;
mod node;
mod tree;

pub use config::{
    CLIPBOARD_ROOT_NAME, DEFAULT_FOLDER_NAME, DEFAULT_ROOT_NAME, MalformedIndentPolicy,
    ParseConfig, ParseConfigBuilder, WorkspaceConfig, WorkspaceConfigBuilder,
};
pub use error::{FolderError, ParseWarning, WarningKind};
pub use node::{FolderNode, NodeId, Walk};
pub use tree::{FolderTree, TreeStats};

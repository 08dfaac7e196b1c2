//! Folder tree operations for fldr.
//!
//! This crate provides the editing operations over a [`FolderTree`]:
//!
//! - **Indent parsing** - build nested folders from indentation-formatted text
//! - **Navigation** - a current-directory cursor with a breadcrumb path
//! - **Selection** - paste targets that persist across navigation
//! - **Merge** - recursive, name-keyed paste of one tree into selected folders
//!
//! [`Workspace`] composes all four over one tree. A clipboard is a second,
//! independent `Workspace` used as the merge source.
//!
//! ```rust
//! use fldr_ops::Workspace;
//!
//! let mut primary = Workspace::default();
//! primary.create_from_text("Projects\nArchive");
//!
//! let mut clipboard = Workspace::clipboard(primary.config());
//! clipboard.create_from_text("docs\n drafts\nsrc");
//!
//! for entry in primary.entries() {
//!     primary.select(entry.id).unwrap();
//! }
//! let report = primary.paste_clipboard_into_selection(&clipboard);
//! assert_eq!(report.targets, 2);
//! assert_eq!(report.created, 6);
//! ```

mod merge;
mod navigation;
mod parse;
mod selection;
mod workspace;

pub use merge::{MergeEngine, MergeReport};
pub use navigation::{Crumb, Navigator};
pub use parse::{IndentParser, ParseReport};
pub use selection::SelectionSet;
pub use workspace::{FolderEntry, Workspace};

// Re-export core types
pub use fldr_core::{
    FolderError, FolderNode, FolderTree, MalformedIndentPolicy, NodeId, ParseConfig,
    ParseWarning, TreeStats, WarningKind, WorkspaceConfig,
};

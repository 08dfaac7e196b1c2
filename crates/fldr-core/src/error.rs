//! Error and warning types for folder tree operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::node::NodeId;

/// Errors that can occur while operating on a folder tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FolderError {
    /// No node with this id exists in the tree.
    #[error("Node not found: {id}")]
    NodeNotFound { id: NodeId },

    /// The node exists but is not a direct child of the expected parent.
    #[error("Node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Kind of parse warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Line was indented deeper than any folder it could nest under, and was
    /// placed at the current level instead.
    CoercedIndent,
    /// Line was indented deeper than any folder it could nest under, and was
    /// dropped.
    SkippedIndent,
}

/// Non-fatal irregularity found while parsing indented input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// 1-based line number in the raw input.
    pub line: usize,
    /// The raw line text.
    pub text: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ParseWarning {
    /// Create a new parse warning.
    pub fn new(line: usize, text: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            line,
            text: text.into(),
            kind,
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        match self.kind {
            WarningKind::CoercedIndent => format!(
                "line {}: no parent folder to nest '{}' under, placed at current level",
                self.line,
                self.text.trim()
            ),
            WarningKind::SkippedIndent => format!(
                "line {}: no parent folder to nest '{}' under, skipped",
                self.line,
                self.text.trim()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolderError::NotAChild {
            parent: NodeId::new(1),
            child: NodeId::new(7),
        };
        assert_eq!(err.to_string(), "Node #7 is not a child of #1");
    }

    #[test]
    fn test_warning_message() {
        let warning = ParseWarning::new(3, "   Beta", WarningKind::SkippedIndent);
        assert!(warning.message().starts_with("line 3"));
        assert!(warning.message().contains("'Beta'"));
    }
}

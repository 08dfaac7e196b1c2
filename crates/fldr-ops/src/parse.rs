//! Indentation-to-hierarchy parser.
//!
//! Every non-blank input line becomes one folder. A line's leading whitespace
//! (each space or tab counts once, divided by the configured indent unit) is
//! its nesting level relative to the folder being parsed into:
//!
//! ```text
//! Alpha        -> child of target
//!  Beta        -> child of Alpha
//!   Gamma      -> child of Beta
//! Delta        -> child of target
//! ```
//!
//! Parsing is recursive descent over a shared line cursor. A line deeper than
//! the current level descends into the folder most recently created at that
//! level. When no such folder exists yet, the line is handled according to
//! [`MalformedIndentPolicy`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use fldr_core::{FolderNode, MalformedIndentPolicy, ParseConfig, ParseWarning, WarningKind};

/// Outcome of a parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Number of folders created, at any depth.
    pub created: usize,
    /// Lines that needed the malformed-indent policy.
    pub warnings: Vec<ParseWarning>,
}

impl ParseReport {
    /// Check if any line was coerced or skipped.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A non-blank input line.
#[derive(Debug)]
struct Line<'a> {
    /// 1-based line number in the raw input.
    number: usize,
    raw: &'a str,
    level: usize,
}

/// Shared cursor over the remaining lines.
struct Cursor<'a> {
    lines: Vec<Line<'a>>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&Line<'a>> {
        self.lines.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}

/// Builds folder subtrees from indentation-formatted text.
#[derive(Debug, Clone, Default)]
pub struct IndentParser {
    config: ParseConfig,
}

impl IndentParser {
    /// Create a parser with the given configuration.
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parse `text` and append the resulting folders to `target`.
    ///
    /// Never fails as a whole; irregular lines are reported as warnings.
    pub fn parse_into(&self, target: &mut FolderNode, text: &str) -> ParseReport {
        let lines = text
            .lines()
            .enumerate()
            .filter(|(_, raw)| !raw.trim().is_empty())
            .map(|(i, raw)| Line {
                number: i + 1,
                raw,
                level: self.config.level_of(leading_whitespace(raw)),
            })
            .collect();

        let mut cursor = Cursor { lines, pos: 0 };
        let mut report = ParseReport::default();

        self.parse_level(target, 0, &mut cursor, &mut report);

        debug!(
            target_id = %target.id,
            created = report.created,
            warnings = report.warnings.len(),
            "parsed indented input"
        );
        report
    }

    fn parse_level(
        &self,
        target: &mut FolderNode,
        level: usize,
        cursor: &mut Cursor<'_>,
        report: &mut ParseReport,
    ) {
        // Index into `target.children` of the last folder this call created.
        let mut last_created: Option<usize> = None;

        while let Some(line) = cursor.peek() {
            if line.level < level {
                return;
            }

            if line.level == level {
                last_created = Some(create(target, line.raw, report));
                cursor.advance();
                continue;
            }

            match last_created {
                Some(idx) => {
                    self.parse_level(&mut target.children[idx], level + 1, cursor, report);
                }
                None => {
                    match self.config.malformed {
                        MalformedIndentPolicy::Coerce => {
                            debug!(line = line.number, level, "no parent to nest under, coercing");
                            report.warnings.push(ParseWarning::new(
                                line.number,
                                line.raw,
                                WarningKind::CoercedIndent,
                            ));
                            last_created = Some(create(target, line.raw, report));
                        }
                        MalformedIndentPolicy::Skip => {
                            debug!(line = line.number, level, "no parent to nest under, skipping");
                            report.warnings.push(ParseWarning::new(
                                line.number,
                                line.raw,
                                WarningKind::SkippedIndent,
                            ));
                        }
                    }
                    cursor.advance();
                }
            }
        }
    }
}

/// Append a folder named by the trimmed line and return its index.
fn create(target: &mut FolderNode, raw: &str, report: &mut ParseReport) -> usize {
    target.add_child(FolderNode::new(raw.trim()));
    report.created += 1;
    target.children.len() - 1
}

/// Count leading whitespace characters, with no tab-stop expansion.
fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(node: &FolderNode) -> Vec<&str> {
        node.children.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(leading_whitespace("abc"), 0);
        assert_eq!(leading_whitespace("  abc"), 2);
        assert_eq!(leading_whitespace("\t abc"), 2);
        assert_eq!(leading_whitespace("\t\tabc "), 2);
    }

    #[test]
    fn test_flat_input() {
        let mut root = FolderNode::new("root");
        let report = IndentParser::default().parse_into(&mut root, "a\nb\n  \n\nc\n");
        assert_eq!(names(&root), ["a", "b", "c"]);
        assert_eq!(report.created, 3);
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_nested_input() {
        let mut root = FolderNode::new("root");
        IndentParser::default().parse_into(&mut root, "Alpha\n Beta\n  Gamma\nDelta");

        assert_eq!(names(&root), ["Alpha", "Delta"]);
        assert_eq!(names(&root.children[0]), ["Beta"]);
        assert_eq!(names(&root.children[0].children[0]), ["Gamma"]);
    }

    #[test]
    fn test_names_are_trimmed() {
        let mut root = FolderNode::new("root");
        IndentParser::default().parse_into(&mut root, "a   \n b\t\r\n");
        assert_eq!(names(&root), ["a"]);
        assert_eq!(names(&root.children[0]), ["b"]);
    }

    #[test]
    fn test_indent_unit() {
        let config = ParseConfig::builder().indent_unit(4usize).build().unwrap();
        let mut root = FolderNode::new("root");
        IndentParser::new(config).parse_into(&mut root, "a\n    b\n        c\n    d");

        assert_eq!(names(&root), ["a"]);
        assert_eq!(names(&root.children[0]), ["b", "d"]);
        assert_eq!(names(&root.children[0].children[0]), ["c"]);
    }

    #[test]
    fn test_coerced_line_becomes_parent_of_same_depth_lines() {
        let mut root = FolderNode::new("root");
        let report = IndentParser::default().parse_into(&mut root, " a\n b\nc");
        assert_eq!(names(&root), ["a", "c"]);
        assert_eq!(names(&root.children[0]), ["b"]);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_dedent_returns_multiple_levels() {
        let mut root = FolderNode::new("root");
        IndentParser::default().parse_into(&mut root, "a\n b\n  c\n   d\ne");
        assert_eq!(names(&root), ["a", "e"]);
    }
}

//! Parse and workspace configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::FolderError;

/// Default name of a primary workspace root.
pub const DEFAULT_ROOT_NAME: &str = "Main Directory";

/// Default name of a clipboard workspace root.
pub const CLIPBOARD_ROOT_NAME: &str = "Paster Root";

/// Default name for a single folder created without a name.
pub const DEFAULT_FOLDER_NAME: &str = "New Folder";

/// What to do with a line that asks to nest under a folder that does not
/// exist (e.g. the very first line of the input is indented).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedIndentPolicy {
    /// Treat the line as if it were at the current level.
    #[default]
    Coerce,
    /// Drop the line and keep parsing.
    Skip,
}

/// Configuration for indentation parsing.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ParseConfig {
    /// Leading whitespace characters per nesting level.
    ///
    /// `1` compares raw whitespace counts directly against the depth.
    #[builder(default = "1")]
    #[serde(default = "default_indent_unit")]
    pub indent_unit: usize,

    /// Policy for lines indented past any available parent.
    #[builder(default)]
    #[serde(default)]
    pub malformed: MalformedIndentPolicy,
}

fn default_indent_unit() -> usize {
    1
}

impl ParseConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.indent_unit == Some(0) {
            return Err("Indent unit must be at least 1".to_string());
        }
        Ok(())
    }
}

impl ParseConfig {
    /// Create a new parse config builder.
    pub fn builder() -> ParseConfigBuilder {
        ParseConfigBuilder::default()
    }

    /// Check a config that did not come through the builder (e.g. deserialized).
    pub fn validate(&self) -> Result<(), FolderError> {
        if self.indent_unit == 0 {
            return Err(FolderError::InvalidConfig {
                message: "indent_unit must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Nesting level for a line with `whitespace` leading whitespace characters.
    pub fn level_of(&self, whitespace: usize) -> usize {
        whitespace / self.indent_unit.max(1)
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            indent_unit: 1,
            malformed: MalformedIndentPolicy::default(),
        }
    }
}

/// Configuration for a workspace.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct WorkspaceConfig {
    /// Name given to the root folder.
    #[builder(default = "DEFAULT_ROOT_NAME.to_string()")]
    #[serde(default = "default_root_name")]
    pub root_name: String,

    /// Name given to folders created without an explicit name.
    #[builder(default = "DEFAULT_FOLDER_NAME.to_string()")]
    #[serde(default = "default_folder_name")]
    pub default_folder_name: String,

    /// Indentation parsing options.
    #[builder(default)]
    #[serde(default)]
    pub parse: ParseConfig,
}

fn default_root_name() -> String {
    DEFAULT_ROOT_NAME.to_string()
}

fn default_folder_name() -> String {
    DEFAULT_FOLDER_NAME.to_string()
}

impl WorkspaceConfig {
    /// Create a new workspace config builder.
    pub fn builder() -> WorkspaceConfigBuilder {
        WorkspaceConfigBuilder::default()
    }

    /// Same settings, with the root named for a clipboard.
    pub fn for_clipboard(&self) -> Self {
        Self {
            root_name: CLIPBOARD_ROOT_NAME.to_string(),
            ..self.clone()
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            default_folder_name: default_folder_name(),
            parse: ParseConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_builder() {
        let config = ParseConfig::builder()
            .indent_unit(4usize)
            .malformed(MalformedIndentPolicy::Skip)
            .build()
            .unwrap();

        assert_eq!(config.indent_unit, 4);
        assert_eq!(config.malformed, MalformedIndentPolicy::Skip);
    }

    #[test]
    fn test_parse_config_rejects_zero_unit() {
        assert!(ParseConfig::builder().indent_unit(0usize).build().is_err());

        let config = ParseConfig {
            indent_unit: 0,
            ..ParseConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_level_of() {
        let literal = ParseConfig::default();
        assert_eq!(literal.level_of(3), 3);

        let four = ParseConfig::builder().indent_unit(4usize).build().unwrap();
        assert_eq!(four.level_of(0), 0);
        assert_eq!(four.level_of(4), 1);
        assert_eq!(four.level_of(7), 1);
        assert_eq!(four.level_of(8), 2);
    }

    #[test]
    fn test_workspace_config_defaults() {
        let config = WorkspaceConfig::builder().build().unwrap();
        assert_eq!(config.root_name, DEFAULT_ROOT_NAME);
        assert_eq!(config.default_folder_name, DEFAULT_FOLDER_NAME);
        assert_eq!(config.parse, ParseConfig::default());
        assert_eq!(config.for_clipboard().root_name, CLIPBOARD_ROOT_NAME);
    }
}

//! Loading workspace configuration from TOML plus command-line overrides.
//!
//! ```toml
//! root_name = "Projects"
//! default_folder_name = "Untitled"
//!
//! [parse]
//! indent_unit = 2
//! malformed = "skip"
//! ```

use std::path::Path;

use color_eyre::eyre::{Context, Result};

use fldr_core::{MalformedIndentPolicy, WorkspaceConfig};

/// Overrides given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub indent_unit: Option<usize>,
    pub malformed: Option<MalformedIndentPolicy>,
    pub root_name: Option<String>,
}

/// Parse a TOML configuration document.
pub fn parse_config(text: &str) -> Result<WorkspaceConfig> {
    let config: WorkspaceConfig = toml::from_str(text).context("Invalid configuration file")?;
    config.parse.validate()?;
    Ok(config)
}

/// Load configuration from `path` if given, then apply overrides.
pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<WorkspaceConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            parse_config(&text)?
        }
        None => WorkspaceConfig::default(),
    };

    if let Some(unit) = overrides.indent_unit {
        config.parse.indent_unit = unit;
    }
    if let Some(policy) = overrides.malformed {
        config.parse.malformed = policy;
    }
    if let Some(name) = &overrides.root_name {
        config.root_name = name.clone();
    }
    config.parse.validate()?;

    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

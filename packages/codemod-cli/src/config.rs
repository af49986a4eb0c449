//! Configuration file
//!
//! Optional JSON file passed with `--config`. Command-line flags win over
//! values read from here.

use std::fs;
use std::path::Path;

use anyhow::Context;
use object_shorthand::PrintOptions;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodemodConfig {
    pub print_options: Option<PrintOptions>,
    /// File extensions (without the dot) picked up from directories.
    pub extensions: Option<Vec<String>>,
    /// Glob patterns, relative to each directory argument, to leave out.
    #[serde(default)]
    pub ignore_pattern: Vec<String>,
}

impl CodemodConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: CodemodConfig = serde_json::from_str(content)?;
        Ok(config)
    }
}

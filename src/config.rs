//! Configuration for a generation run.
//!
//! Every setting has a built-in default, so running without any configuration
//! reads the fixed input files from the working directory and writes Elm to
//! stdout. An optional TOML file and command-line flags can override them.
//!
//! ```toml
//! [paths]
//! emoji_data = "data/emoji.json"
//! annotations = "data/cldr-annotations-en.xml"
//!
//! [output]
//! format = "json"
//! sections = "table"
//! out = "generated/emojis.json"
//! ```

use crate::constants::{DEFAULT_ANNOTATIONS_FILE, DEFAULT_EMOJI_DATA_FILE};
use crate::emit::{OutputFormat, Sections};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Input file locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathConfig {
    /// emoji-data JSON table
    pub emoji_data: PathBuf,
    /// CLDR annotation XML
    pub annotations: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            emoji_data: PathBuf::from(DEFAULT_EMOJI_DATA_FILE),
            annotations: PathBuf::from(DEFAULT_ANNOTATIONS_FILE),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Declaration grammar
    pub format: OutputFormat,
    /// Which blocks to generate
    pub sections: Sections,
    /// Destination file; stdout when unset
    pub out: Option<PathBuf>,
}

/// Run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Input file locations
    pub paths: PathConfig,
    /// Output settings
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// Missing keys take their defaults; unknown keys are rejected.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid configuration")
    }
}

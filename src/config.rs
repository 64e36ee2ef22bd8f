//! Configuration file (kata.yaml) parsing.
//!
//! Every field is optional; a missing file means all defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{KataError, Result};

/// Default config filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "kata.yaml";

/// Configuration loaded from kata.yaml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Brace expansion options.
    pub expand: ExpandConfig,

    /// Result output options.
    pub output: OutputConfig,
}

/// Options for brace expansion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandConfig {
    /// Keep equal expansions reached through different groups.
    pub keep_duplicates: bool,

    /// Upper bound on the number of fully expanded strings.
    pub max_results: Option<usize>,
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One result per line.
    #[default]
    Text,
    /// A JSON document.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| KataError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| KataError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Load `kata.yaml` from `dir` if it exists, otherwise use defaults.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = Self::path_in(dir);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Where `discover` looks for the config file.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILENAME)
    }
}

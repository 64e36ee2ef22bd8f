pub mod completions;
pub mod expand;
pub mod selector;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// kata - brace expansion and CSS selector building
#[derive(Parser, Debug)]
#[command(name = "kata")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./kata.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand brace groups in one or more patterns
    Expand(expand::ExpandArgs),

    /// Build a CSS selector from kind=value steps
    Selector(selector::SelectorArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Cli {
    /// Load the config named by --config, or discover one in the working directory.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Config::discover(&std::env::current_dir()?),
        }
    }
}

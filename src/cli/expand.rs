//! Expand command implementation.
//!
//! Prints every expansion of each pattern to stdout, one per line or as JSON.

use clap::Args;
use serde::Serialize;

use crate::braces::Expander;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::{plural, Printer};

/// Expand brace groups in one or more patterns
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Patterns to expand, e.g. 'img.{png,jp{e,}g}'
    #[arg(required = true)]
    pub patterns: Vec<String>,

    /// Keep equal expansions reached through different groups
    #[arg(long)]
    pub keep_duplicates: bool,

    /// Fail when a pattern expands to more than this many strings
    #[arg(long)]
    pub max: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Expansions of one input pattern.
#[derive(Debug, Serialize)]
pub struct PatternExpansion {
    pub pattern: String,
    pub expansions: Vec<String>,
}

pub fn run(args: ExpandArgs, config: &Config, printer: &Printer) -> Result<()> {
    let expander = expander_for(&args, config);
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let mut results = Vec::with_capacity(args.patterns.len());
    for pattern in &args.patterns {
        let expansions = expander.expand(pattern)?;

        if pattern.contains('{') {
            printer.status(
                "Expanded",
                &format!(
                    "{} from {}",
                    plural(expansions.len(), "string", "strings"),
                    printer.dim(pattern)
                ),
            );
        } else {
            printer.warning("Unchanged", &format!("no brace groups in {}", printer.dim(pattern)));
        }

        results.push(PatternExpansion {
            pattern: pattern.clone(),
            expansions,
        });
    }

    println!("{}", render(&results, format)?);
    Ok(())
}

/// Command line flags override the config file.
fn expander_for(args: &ExpandArgs, config: &Config) -> Expander {
    let mut options = config.expand.clone();
    if args.keep_duplicates {
        options.keep_duplicates = true;
    }
    if args.max.is_some() {
        options.max_results = args.max;
    }
    Expander::from_config(&options)
}

/// Format results for stdout.
pub fn render(results: &[PatternExpansion], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(results
            .iter()
            .flat_map(|r| r.expansions.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

use clap::Parser;
use miette::Result;
use kata::cli::{Cli, Commands};
use kata::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();
    let config = cli.load_config()?;

    match cli.command {
        Commands::Expand(args) => kata::cli::expand::run(args, &config, &printer)?,
        Commands::Selector(args) => kata::cli::selector::run(args, &config, &printer)?,
        Commands::Completions(args) => kata::cli::completions::run(args)?,
    }

    Ok(())
}

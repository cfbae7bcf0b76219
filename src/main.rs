//! mdmatter - frontmatter extractor
//!
//! Command line front end for the `mdmatter` library: reads documents from
//! files or stdin and prints their metadata and body.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};
use mdmatter::Result;
use mdmatter::config::Config;

fn run(cli: Cli) -> Result<()> {
    // Version and completions work even with a broken config file
    let command = match cli.command {
        Commands::Version => return commands::version::run(),
        Commands::Completions(args) => return commands::completions::run(args),
        other => other,
    };

    let cwd = commands::helpers::current_dir()?;
    let config = Config::load(cli.config.as_deref(), &cwd)?;

    match command {
        Commands::Parse(args) => commands::parse::run(&config, args),
        Commands::Get(args) => commands::get::run(&config, args),
        Commands::Body(args) => commands::body::run(&config, args),
        Commands::Show(args) => commands::show::run(&config, args),
        Commands::Fmt(args) => commands::fmt::run(&config, args),
        Commands::Scan(args) => commands::scan::run(&config, args),
        Commands::Version | Commands::Completions(_) => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}

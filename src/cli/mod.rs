//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types.

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod body;
pub mod completions;
pub mod fmt;
pub mod get;
pub mod parse;
pub mod scan;
pub mod show;

pub use body::BodyArgs;
pub use completions::CompletionsArgs;
pub use fmt::FmtArgs;
pub use get::GetArgs;
pub use parse::ParseArgs;
pub use scan::ScanArgs;
pub use show::ShowArgs;

/// mdmatter - frontmatter extractor
///
/// Split markdown documents into YAML frontmatter and body.
#[derive(Parser, Debug)]
#[command(
    name = "mdmatter",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Split markdown documents into YAML frontmatter and body",
    long_about = "mdmatter reads a document, extracts the YAML metadata block delimited by \
                  '---' lines and hands back structured metadata plus the verbatim body. \
                  Malformed frontmatter is treated as body unless --strict is given.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mdmatter parse post.md               \x1b[90m# Metadata and body as JSON\x1b[0m\n   \
                  mdmatter get title post.md           \x1b[90m# Print one value\x1b[0m\n   \
                  mdmatter body post.md                \x1b[90m# Print the body only\x1b[0m\n   \
                  mdmatter fmt post.md --write         \x1b[90m# Normalize frontmatter in place\x1b[0m\n   \
                  mdmatter scan content/               \x1b[90m# Summarize a directory\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to .mdmatter.yaml in the current directory)
    #[arg(long, short = 'c', global = true, env = "MDMATTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print metadata and body as structured data
    Parse(ParseArgs),

    /// Print a single metadata value
    Get(GetArgs),

    /// Print the body without frontmatter
    Body(BodyArgs),

    /// Show a human-readable summary
    Show(ShowArgs),

    /// Rewrite a document with canonical frontmatter
    Fmt(FmtArgs),

    /// Summarize every document under a directory
    Scan(ScanArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

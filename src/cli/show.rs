use clap::Parser;
use std::path::PathBuf;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Summarize a post:\n    mdmatter show hello.md\n\n\
                  Include the body:\n    mdmatter show hello.md --body")]
pub struct ShowArgs {
    /// Input file, or '-' for stdin
    #[arg(default_value = "-")]
    pub file: PathBuf,

    /// Print the body after the metadata
    #[arg(long)]
    pub body: bool,
}

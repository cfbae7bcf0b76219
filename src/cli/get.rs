use clap::Parser;
use std::path::PathBuf;

/// Arguments for the get command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the title:\n    mdmatter get title hello.md\n\n\
                  Print the first tag:\n    mdmatter get tags.0 hello.md\n\n\
                  Print a nested value:\n    mdmatter get author.name hello.md")]
pub struct GetArgs {
    /// Metadata key; use dots for nested values and sequence indices
    pub key: String,

    /// Input file, or '-' for stdin
    #[arg(default_value = "-")]
    pub file: PathBuf,
}

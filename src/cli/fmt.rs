use clap::Parser;
use std::path::PathBuf;

/// Arguments for the fmt command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the normalized document:\n    mdmatter fmt hello.md\n\n\
                  Rewrite the file in place:\n    mdmatter fmt hello.md --write")]
pub struct FmtArgs {
    /// Input file, or '-' for stdin
    #[arg(default_value = "-")]
    pub file: PathBuf,

    /// Rewrite the file instead of printing it
    #[arg(long, short = 'w')]
    pub write: bool,
}

use clap::Parser;
use mdmatter::config::OutputFormat;
use std::path::PathBuf;

/// Arguments for the scan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Summarize every markdown file under content/:\n    mdmatter scan content\n\n\
                  Fail if any file has malformed frontmatter:\n    mdmatter scan content --strict")]
pub struct ScanArgs {
    /// Directory to walk
    pub dir: PathBuf,

    /// Output format (overrides the config file)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// Report malformed frontmatter instead of treating it as body
    #[arg(long)]
    pub strict: bool,
}

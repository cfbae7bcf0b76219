use clap::Parser;
use mdmatter::config::OutputFormat;
use std::path::PathBuf;

/// Arguments for the parse command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Parse a post as JSON:\n    mdmatter parse posts/hello.md\n\n\
                  Parse from stdin as YAML:\n    cat hello.md | mdmatter parse --format yaml\n\n\
                  Fail on malformed frontmatter:\n    mdmatter parse hello.md --strict")]
pub struct ParseArgs {
    /// Input file, or '-' for stdin
    #[arg(default_value = "-")]
    pub file: PathBuf,

    /// Output format (overrides the config file)
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// Report malformed frontmatter instead of treating it as body
    #[arg(long)]
    pub strict: bool,
}

use clap::Parser;
use std::path::PathBuf;

/// Arguments for the body command
#[derive(Parser, Debug)]
pub struct BodyArgs {
    /// Input file, or '-' for stdin
    #[arg(default_value = "-")]
    pub file: PathBuf,
}

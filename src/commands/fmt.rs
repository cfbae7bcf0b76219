//! Fmt command implementation
//!
//! Rewrites a document with its frontmatter re-serialized in canonical YAML.

use mdmatter::config::Config;
use mdmatter::error::fs::write_failed;
use mdmatter::{MdmatterError, Result};

use super::helpers::{is_stdin, read_input};
use crate::cli::FmtArgs;

pub fn run(config: &Config, args: FmtArgs) -> Result<()> {
    if args.write && is_stdin(&args.file) {
        return Err(MdmatterError::StdinNotWritable);
    }

    let content = read_input(&args.file)?;
    let formatted = config.parser().parse(&content)?.to_markdown()?;

    if !args.write {
        print!("{formatted}");
        return Ok(());
    }

    if formatted == content {
        tracing::debug!(path = %args.file.display(), "already formatted");
        return Ok(());
    }
    std::fs::write(&args.file, &formatted)
        .map_err(|e| write_failed(args.file.display().to_string(), e.to_string()))?;
    println!("Formatted {}", args.file.display());
    Ok(())
}

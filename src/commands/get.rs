//! Get command implementation

use mdmatter::Result;
use mdmatter::config::Config;
use mdmatter::error::metadata::key_not_found;

use super::helpers::{read_input, render_value};
use crate::cli::GetArgs;

pub fn run(config: &Config, args: GetArgs) -> Result<()> {
    println!("{}", render(config, &args)?);
    Ok(())
}

fn render(config: &Config, args: &GetArgs) -> Result<String> {
    let content = read_input(&args.file)?;
    let document = config.parser().parse(&content)?;
    let value = document
        .lookup(&args.key)
        .ok_or_else(|| key_not_found(&args.key))?;
    render_value(value)
}

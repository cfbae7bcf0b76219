//! Parse command implementation

use mdmatter::Result;
use mdmatter::config::Config;

use super::helpers::{read_input, render_structured};
use crate::cli::ParseArgs;

pub fn run(config: &Config, args: ParseArgs) -> Result<()> {
    print!("{}", render(config, &args)?);
    Ok(())
}

fn render(config: &Config, args: &ParseArgs) -> Result<String> {
    let content = read_input(&args.file)?;
    let parser = mdmatter::FrontmatterParser::with_strict(args.strict || config.strict);
    let document = parser.parse(&content)?;
    render_structured(&document, args.format.unwrap_or(config.format))
}

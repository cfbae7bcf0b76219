//! Body command implementation

use mdmatter::Result;
use mdmatter::config::Config;

use super::helpers::read_input;
use crate::cli::BodyArgs;

pub fn run(config: &Config, args: BodyArgs) -> Result<()> {
    let content = read_input(&args.file)?;
    let document = config.parser().parse(&content)?;
    print!("{}", document.body());
    Ok(())
}

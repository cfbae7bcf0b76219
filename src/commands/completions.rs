//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use mdmatter::Result;
use mdmatter::error::cli::unsupported_shell;

use crate::cli::CompletionsArgs;

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell_name = args.shell.to_lowercase();
    let shell = match shell_name.as_str() {
        "bash" => Shell::Bash,
        "elvish" => Shell::Elvish,
        "fish" => Shell::Fish,
        "powershell" | "pwsh" => Shell::PowerShell,
        "zsh" => Shell::Zsh,
        _ => return Err(unsupported_shell(args.shell)),
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "mdmatter", &mut std::io::stdout().lock());

    Ok(())
}

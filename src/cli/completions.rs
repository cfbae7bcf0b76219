use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    mdmatter completions bash > ~/.bash_completion.d/mdmatter\n\n\
                  Generate zsh completions:\n    mdmatter completions zsh > ~/.zfunc/_mdmatter\n\n\
                  Generate fish completions:\n    mdmatter completions fish > ~/.config/fish/completions/mdmatter.fish\n\n\
                  Generate PowerShell completions:\n    mdmatter completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}

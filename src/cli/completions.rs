use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    installer-hc completions bash > ~/.bash_completion.d/installer-hc\n\n\
                  Generate zsh completions:\n    installer-hc completions zsh > ~/.zfunc/_installer-hc\n\n\
                  Generate fish completions:\n    installer-hc completions fish > ~/.config/fish/completions/installer-hc.fish\n\n\
                  Generate PowerShell completions:\n    installer-hc completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}

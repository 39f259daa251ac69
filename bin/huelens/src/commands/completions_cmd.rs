use clap_complete::{generate, Shell};

/// Generate shell completion scripts.
///
/// Re-creates a minimal CLI definition here to generate completions
/// without a circular dependency on the main Cli struct.
pub async fn run(shell: &str) -> anyhow::Result<()> {
    let shell = match shell.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" | "ps" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        _ => {
            anyhow::bail!(
                "Unsupported shell: {}. Options: bash, zsh, fish, powershell, elvish",
                shell
            );
        }
    };

    let mut cmd = build_cli();
    generate(shell, &mut cmd, "huelens", &mut std::io::stdout());

    eprintln!();
    eprintln!("# Usage:");
    match shell {
        Shell::Bash => {
            eprintln!("#   huelens completions bash > ~/.local/share/bash-completion/completions/huelens");
            eprintln!("#   or: eval \"$(huelens completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   huelens completions zsh > ~/.zfunc/_huelens");
            eprintln!("#   Make sure fpath includes ~/.zfunc and run compinit");
        }
        Shell::Fish => {
            eprintln!("#   huelens completions fish > ~/.config/fish/completions/huelens.fish");
        }
        _ => {}
    }

    Ok(())
}

/// Build a minimal CLI definition for completion generation.
fn build_cli() -> clap::Command {
    clap::Command::new("huelens")
        .about("Detect a color-vision deficiency from a description and pick a CSS filter")
        .subcommand(clap::Command::new("onboard").about("Initialize configuration"))
        .subcommand(clap::Command::new("detect").about("Detect from a free-text description"))
        .subcommand(
            clap::Command::new("filters")
                .about("Inspect the filter registry")
                .subcommand(clap::Command::new("list").about("List all filter expressions"))
                .subcommand(clap::Command::new("show").about("Show one filter expression")),
        )
        .subcommand(
            clap::Command::new("config")
                .about("Manage configuration")
                .subcommand(clap::Command::new("show").about("Show the configuration"))
                .subcommand(clap::Command::new("get").about("Get a config value"))
                .subcommand(clap::Command::new("set").about("Set a config value")),
        )
        .subcommand(clap::Command::new("doctor").about("Run environment diagnostics"))
        .subcommand(clap::Command::new("completions").about("Generate shell completions"))
}

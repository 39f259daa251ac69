mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "huelens")]
#[command(about = "Detect a color-vision deficiency from a description and pick a CSS filter", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize huelens configuration
    Onboard {
        /// Force overwrite existing configuration
        #[arg(long)]
        force: bool,
    },

    /// Detect a color-vision deficiency from a free-text description
    Detect {
        /// How you perceive or confuse colors, in your own words
        #[arg(required = true)]
        description: Vec<String>,

        /// Also print a ready-to-paste snippet for the page
        #[arg(long)]
        css: bool,
    },

    /// Inspect the filter registry
    Filters {
        #[command(subcommand)]
        command: FiltersCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Run environment diagnostics
    Doctor,

    /// Generate shell completion scripts
    Completions {
        /// Shell: bash, zsh, fish, powershell, elvish
        shell: String,
    },
}

#[derive(Subcommand)]
enum FiltersCommands {
    /// List every category and its filter expression
    List,
    /// Show the filter expression for one category
    Show {
        /// One of: protanopia, deuteranopia, tritanopia
        category: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Get a config value by dot-separated key path
    Get { key: String },
    /// Set a config value by dot-separated key path
    Set { key: String, value: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Onboard { force } => {
            commands::onboard::run(force).await?;
        }
        Commands::Detect { description, css } => {
            commands::detect::run(&description.join(" "), css).await?;
        }
        Commands::Filters { command } => match command {
            FiltersCommands::List => {
                commands::filters_cmd::list().await?;
            }
            FiltersCommands::Show { category } => {
                commands::filters_cmd::show(&category).await?;
            }
        },
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                commands::config_cmd::show().await?;
            }
            ConfigCommands::Get { key } => {
                commands::config_cmd::get(&key).await?;
            }
            ConfigCommands::Set { key, value } => {
                commands::config_cmd::set(&key, &value).await?;
            }
        },
        Commands::Doctor => {
            commands::doctor::run().await?;
        }
        Commands::Completions { shell } => {
            commands::completions_cmd::run(&shell).await?;
        }
    }

    Ok(())
}

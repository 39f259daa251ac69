use huelens_core::{Config, Paths};

/// Create ~/.huelens and write the default configuration.
pub async fn run(force: bool) -> anyhow::Result<()> {
    let paths = Paths::new();
    let config_path = paths.config_file();

    if config_path.exists() && !force {
        println!("Config already exists: {}", config_path.display());
        println!("Use --force to overwrite.");
        return Ok(());
    }

    paths.ensure_dirs()?;
    let config = Config::default();
    config.save(&config_path)?;

    println!();
    println!("✓ Created {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Set your Gemini API key:");
    println!("     huelens config set gemini.api_key <KEY>");
    println!("  2. Describe how you see colors:");
    println!("     huelens detect \"red and green look similar\"");
    Ok(())
}

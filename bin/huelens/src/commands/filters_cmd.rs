use huelens_core::{Category, Config, Paths};
use huelens_filters::FilterRegistry;

/// List every category and its filter expression.
pub async fn list() -> anyhow::Result<()> {
    let paths = Paths::new();
    let config = Config::load_or_default(&paths)?;
    let registry = FilterRegistry::from_config(&config)?;

    println!();
    println!("🎨 Filter Registry");
    println!();
    for category in Category::ALL {
        println!("  {:<14} {}", category.as_str(), registry.lookup(category));
    }
    println!();
    Ok(())
}

/// Print the filter expression for one category, bare, so it can be piped.
pub async fn show(category: &str) -> anyhow::Result<()> {
    let category: Category = match category.parse() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Options: protanopia, deuteranopia, tritanopia");
            std::process::exit(1);
        }
    };

    let paths = Paths::new();
    let config = Config::load_or_default(&paths)?;
    let registry = FilterRegistry::from_config(&config)?;

    println!("{}", registry.lookup(category));
    Ok(())
}

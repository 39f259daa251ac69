use huelens_core::{Config, Paths};
use huelens_filters::FilterRegistry;

/// Run environment diagnostics: config file, API key, filter registry.
pub async fn run() -> anyhow::Result<()> {
    let paths = Paths::new();

    println!();
    println!("🩺 huelens doctor");
    println!("================");
    println!();

    let mut err_count = 0u32;

    println!("📋 Configuration");
    let config_path = paths.config_file();
    if config_path.exists() {
        print_ok("Config file exists", &config_path.display().to_string());
    } else {
        print_err("Config file not found", "Run `huelens onboard` to initialize");
        err_count += 1;
    }

    let config = Config::load_or_default(&paths)?;

    if config.has_api_key() {
        print_ok("API key configured", &mask_key(&config.gemini.api_key));
    } else {
        print_err(
            "No API key configured",
            "Set it with `huelens config set gemini.api_key <KEY>`",
        );
        err_count += 1;
    }
    println!("  Model: {}", config.gemini.model);
    println!();

    println!("🎨 Filter Registry");
    match FilterRegistry::from_config(&config) {
        Ok(_) => print_ok("Registry built", "all three categories mapped"),
        Err(e) => {
            print_err("Registry rejected config", &e.to_string());
            err_count += 1;
        }
    }
    println!();

    if err_count == 0 {
        println!("✓ All checks passed");
    } else {
        println!("✗ {} check(s) failed", err_count);
        std::process::exit(1);
    }
    Ok(())
}

// Keys are not guaranteed ASCII; mask by characters, not bytes.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "(set)".to_string()
    }
}

fn print_ok(label: &str, detail: &str) {
    if detail.is_empty() {
        println!("  ✓ {}", label);
    } else {
        println!("  ✓ {}: {}", label, detail);
    }
}

fn print_err(label: &str, detail: &str) {
    println!("  ✗ {}: {}", label, detail);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key() {
        assert_eq!(mask_key("AIzaSyCea2ZfD2zn"), "AIza...D2zn");
        assert_eq!(mask_key("short"), "(set)");
        assert_eq!(mask_key("ключ-секрет-ключ"), "ключ...ключ");
    }
}

use huelens_core::{Config, Paths};
use serde_json::Value;

/// Show the current configuration as pretty-printed JSON.
pub async fn show() -> anyhow::Result<()> {
    let paths = Paths::new();
    let config = Config::load_or_default(&paths)?;
    let json = serde_json::to_value(&config)?;

    println!();
    println!("📋 Current Configuration");
    println!("  File: {}", paths.config_file().display());
    println!();
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

/// Get a config value by dot-separated key path.
pub async fn get(key: &str) -> anyhow::Result<()> {
    let paths = Paths::new();
    let config = Config::load_or_default(&paths)?;
    let json = serde_json::to_value(&config)?;

    match resolve_json_path(&json, key) {
        Some(v) => {
            if v.is_string() {
                println!("{}", v.as_str().unwrap());
            } else {
                println!("{}", serde_json::to_string_pretty(&v)?);
            }
        }
        None => {
            eprintln!("Key '{}' not found in config.", key);
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Set a config value by dot-separated key path.
pub async fn set(key: &str, value: &str) -> anyhow::Result<()> {
    let paths = Paths::new();
    let config = Config::load_or_default(&paths)?;
    let mut json = serde_json::to_value(&config)?;

    // Try to parse value as JSON, fall back to string
    let parsed: Value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));

    set_json_path(&mut json, key, parsed.clone());

    // Re-deserializing validates the result before it is written back
    let new_config: Config = serde_json::from_value(json)?;
    new_config.save(&paths.config_file())?;

    if parsed.is_string() {
        println!("✓ Set {} = {}", key, parsed.as_str().unwrap());
    } else {
        println!("✓ Set {} = {}", key, serde_json::to_string(&parsed)?);
    }
    Ok(())
}

/// Navigate a JSON value by dot-separated path. Accepts snake_case key
/// segments for the camelCase config fields (e.g. "gemini.api_key").
fn resolve_json_path(json: &Value, path: &str) -> Option<Value> {
    let mut current = json;
    for part in path.split('.') {
        let camel = to_camel_case(part);
        if let Some(v) = current.get(&camel) {
            current = v;
        } else if let Some(v) = current.get(part) {
            current = v;
        } else {
            return None;
        }
    }
    Some(current.clone())
}

/// Set a value in a JSON object by dot-separated path.
fn set_json_path(json: &mut Value, path: &str, value: Value) {
    let parts: Vec<&str> = path.split('.').collect();
    let mut current = json;
    for (i, part) in parts.iter().enumerate() {
        let camel = to_camel_case(part);
        let key = if current.get(&camel).is_some() {
            camel
        } else {
            part.to_string()
        };

        if i == parts.len() - 1 {
            current[&key] = value;
            return;
        }

        if current.get(&key).is_none() || !current[&key].is_object() {
            current[&key] = serde_json::json!({});
        }
        current = &mut current[&key];
    }
}

/// Convert snake_case to camelCase.
fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;
    for ch in s.chars() {
        if ch == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(ch.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}

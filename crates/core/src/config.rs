use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::paths::Paths;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: String,
    /// Base URL override (e.g. for a proxy or regional endpoint).
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_max_output_tokens() -> u32 {
    256
}

fn default_temperature() -> f32 {
    0.2
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: None,
            model: default_model(),
            max_output_tokens: default_max_output_tokens(),
            temperature: default_temperature(),
        }
    }
}

/// CSS `filter` expressions keyed by category. Each expression must be
/// non-empty; the registry rejects the config at startup otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersConfig {
    #[serde(default = "default_protanopia_filter")]
    pub protanopia: String,
    #[serde(default = "default_deuteranopia_filter")]
    pub deuteranopia: String,
    #[serde(default = "default_tritanopia_filter")]
    pub tritanopia: String,
}

fn default_protanopia_filter() -> String {
    "brightness(1) contrast(1) sepia(0.2) saturate(0.8)".to_string()
}

fn default_deuteranopia_filter() -> String {
    "brightness(1) contrast(1) sepia(0.1) saturate(0.7)".to_string()
}

fn default_tritanopia_filter() -> String {
    "brightness(0.9) hue-rotate(45deg) saturate(0.7)".to_string()
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            protanopia: default_protanopia_filter(),
            deuteranopia: default_deuteranopia_filter(),
            tritanopia: default_tritanopia_filter(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub filters: FiltersConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn load_or_default(paths: &Paths) -> Result<Self> {
        let config_path = paths.config_file();
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn has_api_key(&self) -> bool {
        !self.gemini.api_key.trim().is_empty()
    }
}

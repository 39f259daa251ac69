use huelens_core::{Category, Config, Error, Result};

/// Immutable mapping from [`Category`] to a CSS `filter` expression.
///
/// One field per category, so a missing entry cannot be represented and
/// `lookup` has no error path. Built once at startup from config and shared
/// read-only for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    protanopia: String,
    deuteranopia: String,
    tritanopia: String,
}

impl FilterRegistry {
    /// Empty expressions are a configuration defect and are rejected here,
    /// at construction, rather than surfacing later at lookup.
    pub fn new(protanopia: String, deuteranopia: String, tritanopia: String) -> Result<Self> {
        for (category, expression) in [
            (Category::Protanopia, &protanopia),
            (Category::Deuteranopia, &deuteranopia),
            (Category::Tritanopia, &tritanopia),
        ] {
            if expression.trim().is_empty() {
                return Err(Error::Config(format!(
                    "empty filter expression for {}",
                    category
                )));
            }
        }

        Ok(Self {
            protanopia,
            deuteranopia,
            tritanopia,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.filters.protanopia.clone(),
            config.filters.deuteranopia.clone(),
            config.filters.tritanopia.clone(),
        )
    }

    pub fn lookup(&self, category: Category) -> &str {
        match category {
            Category::Protanopia => &self.protanopia,
            Category::Deuteranopia => &self.deuteranopia,
            Category::Tritanopia => &self.tritanopia,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> FilterRegistry {
        FilterRegistry::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_lookup_is_total_and_non_empty() {
        let registry = registry();
        for category in Category::ALL {
            assert!(!registry.lookup(category).is_empty());
        }
    }

    #[test]
    fn test_lookup_is_stable() {
        let registry = registry();
        for category in Category::ALL {
            let first = registry.lookup(category).to_string();
            assert_eq!(registry.lookup(category), first);
            assert_eq!(registry.lookup(category), first);
        }
    }

    #[test]
    fn test_default_expressions() {
        let registry = registry();
        assert_eq!(
            registry.lookup(Category::Deuteranopia),
            "brightness(1) contrast(1) sepia(0.1) saturate(0.7)"
        );
    }

    #[test]
    fn test_config_override() {
        let mut config = Config::default();
        config.filters.tritanopia = "hue-rotate(90deg)".to_string();
        let registry = FilterRegistry::from_config(&config).unwrap();
        assert_eq!(registry.lookup(Category::Tritanopia), "hue-rotate(90deg)");
    }

    #[test]
    fn test_empty_expression_rejected() {
        let result = FilterRegistry::new(
            "sepia(0.2)".to_string(),
            "   ".to_string(),
            "sepia(0.1)".to_string(),
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }
}

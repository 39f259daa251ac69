use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A color-vision deficiency with a corresponding filter in the registry.
/// Normal vision is not a `Category`; it is the [`Detection::NormalVision`]
/// outcome and never maps to a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Protanopia,
    Deuteranopia,
    Tritanopia,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Protanopia,
        Category::Deuteranopia,
        Category::Tritanopia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Protanopia => "protanopia",
            Category::Deuteranopia => "deuteranopia",
            Category::Tritanopia => "tritanopia",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "protanopia" => Ok(Category::Protanopia),
            "deuteranopia" => Ok(Category::Deuteranopia),
            "tritanopia" => Ok(Category::Tritanopia),
            other => Err(Error::Validation(format!("unknown category: {}", other))),
        }
    }
}

/// Outcome of a successful classification: either a specific condition or
/// an explicit "normal vision" answer. Failures travel as [`Error`] so the
/// caller can tell them apart from a deliberate no-filter result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    Condition(Category),
    NormalVision,
}

/// Trim a free-text description, rejecting empty or whitespace-only input.
/// Callers run this before building a prompt; empty input never reaches the
/// classifier.
pub fn trimmed_description(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("protanopia".parse::<Category>().unwrap(), Category::Protanopia);
        assert_eq!(" Deuteranopia ".parse::<Category>().unwrap(), Category::Deuteranopia);
        assert_eq!("TRITANOPIA".parse::<Category>().unwrap(), Category::Tritanopia);
        assert!(matches!(
            "monochromacy".parse::<Category>(),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_category_display_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_trimmed_description() {
        assert_eq!(trimmed_description("  red looks brown  ").unwrap(), "red looks brown");
        assert!(matches!(trimmed_description(""), Err(Error::EmptyInput)));
        assert!(matches!(trimmed_description("   \t\n"), Err(Error::EmptyInput)));
    }
}

use huelens_classifier::{Classifier, GeminiGenerator, TextGenerator};
use huelens_core::{trimmed_description, Config, Detection, Paths, Result};
use huelens_filters::FilterRegistry;
use tracing::error;

/// Classify a free-text description and print the matching filter.
///
/// Three user-distinguishable outcomes: a detected condition prints the
/// category and its filter expression; normal vision prints an explicit
/// "no filter needed" line; any classification failure prints a
/// "could not detect" line and exits non-zero, leaving the page untouched.
pub async fn run(raw: &str, css: bool) -> anyhow::Result<()> {
    if trimmed_description(raw).is_err() {
        eprintln!("Please describe how you perceive or confuse colors.");
        eprintln!("Example: huelens detect \"red and green look similar\"");
        std::process::exit(1);
    }

    let paths = Paths::new();
    let config = Config::load_or_default(&paths)?;
    let registry = FilterRegistry::from_config(&config)?;
    let generator = GeminiGenerator::from_config(&config)?;

    match detect_with(Box::new(generator), raw).await {
        Ok(Detection::Condition(category)) => {
            let expression = registry.lookup(category);
            println!();
            println!("🎨 Detected: {}", category);
            println!("   Filter:   {}", expression);
            if css {
                println!();
                println!("   document.body.style.filter = \"{}\";", expression);
            }
        }
        Ok(Detection::NormalVision) => {
            println!();
            println!("👁 Normal vision detected. No filter needed.");
        }
        Err(e) => {
            error!(error = %e, "Classification failed");
            eprintln!();
            eprintln!("Could not detect a color blindness type. No filter applied.");
            eprintln!("(Run with --verbose for details.)");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Empty-input guard and classification in one place: the generator is only
/// consulted after the description survives trimming, so whitespace-only
/// input never produces a network call.
async fn detect_with(generator: Box<dyn TextGenerator>, raw: &str) -> Result<Detection> {
    let description = trimmed_description(raw)?;
    Classifier::new(generator).classify(description).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use huelens_core::{Category, Error};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingGenerator {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl TextGenerator for CountingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("deuteranopia".to_string())
        }
    }

    #[tokio::test]
    async fn test_whitespace_input_never_reaches_generator() {
        let calls = Arc::new(AtomicUsize::new(0));
        let generator = Box::new(CountingGenerator { calls: calls.clone() });

        let result = detect_with(generator, "   \t\n").await;
        assert!(matches!(result, Err(Error::EmptyInput)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_trimmed_input_reaches_generator_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let generator = Box::new(CountingGenerator { calls: calls.clone() });

        let detection = detect_with(generator, "  green looks faded  ").await.unwrap();
        assert_eq!(detection, Detection::Condition(Category::Deuteranopia));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

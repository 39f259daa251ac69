pub mod classifier;
pub mod gemini;

use async_trait::async_trait;
use huelens_core::Result;

/// Narrow seam over the text-generation backend so reply parsing can be
/// tested without a network dependency.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one prompt, return the raw reply text. No retry, no backoff;
    /// the transport's own timeout defaults apply.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub use classifier::Classifier;
pub use gemini::GeminiGenerator;

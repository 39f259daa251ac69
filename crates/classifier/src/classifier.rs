use huelens_core::{Category, Detection, Error, Result};
use tracing::{debug, info, warn};

use crate::TextGenerator;

/// Recognized tokens and their outcomes, in precedence order. The reply is
/// scanned for "protanopia" before "deuteranopia" before "tritanopia" before
/// "normal", and the first hit wins even when the reply mentions several
/// conditions.
const TOKENS: [(&str, Detection); 4] = [
    ("protanopia", Detection::Condition(Category::Protanopia)),
    ("deuteranopia", Detection::Condition(Category::Deuteranopia)),
    ("tritanopia", Detection::Condition(Category::Tritanopia)),
    ("normal", Detection::NormalVision),
];

/// Maps a free-text description of color perception to a [`Detection`] by
/// asking a text-generation backend and scanning the free-form reply.
///
/// Stateless: each call is independent, and concurrent calls share nothing.
/// The caller is expected to reject empty input beforehand (see
/// [`huelens_core::trimmed_description`]).
pub struct Classifier {
    generator: Box<dyn TextGenerator>,
}

impl Classifier {
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn classify(&self, description: &str) -> Result<Detection> {
        let prompt = build_prompt(description);
        debug!(prompt_len = prompt.len(), "Sending classification prompt");

        let reply = self.generator.generate(&prompt).await?;
        debug!(reply = %reply, "Raw classification reply");

        let detection = match_reply(&reply)?;
        info!(?detection, "Description classified");
        Ok(detection)
    }
}

/// The instruction prompt, with the description embedded verbatim.
fn build_prompt(description: &str) -> String {
    format!(
        r#"Identify the most likely type of color blindness based on how the user describes colors.
They may describe confusion ("red and green look similar") or how a color appears ("red looks brownish").
Return one word: protanopia, deuteranopia, tritanopia, or normal vision.

Examples:
- "Red and green look similar" -> protanopia
- "Blue and green look similar" -> tritanopia
- "Red looks brownish" -> protanopia
- "Green looks faded" -> deuteranopia
- "No issues seeing colors" -> normal vision

Description: "{}""#,
        description
    )
}

/// Case-insensitive substring search over the reply, in token precedence
/// order. A reply with no recognized token is a failure, distinct from a
/// deliberate "normal vision" answer.
fn match_reply(reply: &str) -> Result<Detection> {
    let haystack = reply.to_lowercase();
    for (token, detection) in TOKENS {
        if haystack.contains(token) {
            return Ok(detection);
        }
    }

    warn!(reply = %reply, "No recognized token in reply");
    Err(Error::UnrecognizedPayload(reply.to_string()))
}

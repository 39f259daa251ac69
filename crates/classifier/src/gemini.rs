use async_trait::async_trait;
use huelens_core::{Config, Error, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::TextGenerator;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// [`TextGenerator`] backed by the Gemini generateContent endpoint.
/// One POST per call, authenticated via the API key in the URL; no retry
/// and no explicit timeout beyond reqwest's defaults.
pub struct GeminiGenerator {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
    max_output_tokens: u32,
    temperature: f32,
}

impl GeminiGenerator {
    pub fn new(
        api_key: &str,
        api_base: Option<&str>,
        model: &str,
        max_output_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            api_base: api_base
                .unwrap_or(GEMINI_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            model: model.to_string(),
            max_output_tokens,
            temperature,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        if !config.has_api_key() {
            return Err(Error::Config(
                "gemini.apiKey is not set; run `huelens onboard` and set it with `huelens config set gemini.api_key <KEY>`".to_string(),
            ));
        }
        let gemini = &config.gemini;
        Ok(Self::new(
            &gemini.api_key,
            gemini.api_base.as_deref(),
            &gemini.model,
            gemini.max_output_tokens,
            gemini.temperature,
        ))
    }

    /// Normalize model name: strip "gemini/" prefix if present.
    /// Config may store "gemini/gemini-pro" but the API expects "gemini-pro".
    fn normalize_model(model: &str) -> &str {
        model.strip_prefix("gemini/").unwrap_or(model)
    }

    /// Pull the first candidate's text parts out of a parsed response.
    /// A response with no candidate text is an empty payload, kept distinct
    /// from endpoint and transport failures.
    fn extract_text(resp: GenerateResponse) -> Result<String> {
        let candidate = resp
            .candidates
            .and_then(|c| c.into_iter().next())
            .ok_or(Error::EmptyPayload)?;

        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
        let text_parts: Vec<String> = parts
            .into_iter()
            .filter_map(|p| p.text)
            .filter(|t| !t.is_empty())
            .collect();

        if text_parts.is_empty() {
            return Err(Error::EmptyPayload);
        }
        Ok(text_parts.join("\n"))
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let model = Self::normalize_model(&self.model);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base, model, self.api_key
        );

        let request = serde_json::json!({
            "contents": [{"parts": [{"text": prompt}]}],
            "generationConfig": {
                "temperature": self.temperature,
                "maxOutputTokens": self.max_output_tokens,
            }
        });

        info!(model = %model, "Calling Gemini API");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Gemini request failed: {}", e)))?;

        let status = response.status();
        let raw_body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            error!(status = %status, body = %raw_body, "Gemini API error");
            return Err(Error::Endpoint {
                status: status.as_u16(),
                body: raw_body,
            });
        }

        debug!(body_len = raw_body.len(), "Gemini raw response");

        let resp: GenerateResponse = match serde_json::from_str(&raw_body) {
            Ok(resp) => resp,
            Err(e) => {
                // A 2xx body we cannot parse has no extractable text payload.
                error!(
                    error = %e,
                    body = %truncate_utf8(&raw_body, 500),
                    "Failed to parse Gemini response"
                );
                return Err(Error::EmptyPayload);
            }
        };

        Self::extract_text(resp)
    }
}

/// Cap a diagnostic string at `max_bytes`, flooring the cut to a char
/// boundary so multi-byte characters are never split.
fn truncate_utf8(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_model() {
        assert_eq!(
            GeminiGenerator::normalize_model("gemini/gemini-pro"),
            "gemini-pro"
        );
        assert_eq!(
            GeminiGenerator::normalize_model("gemini-1.5-flash"),
            "gemini-1.5-flash"
        );
    }

    #[test]
    fn test_parse_and_extract() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "deuteranopia"}
                    ],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        }"#;

        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        let text = GeminiGenerator::extract_text(resp).unwrap();
        assert_eq!(text, "deuteranopia");
    }

    #[test]
    fn test_extract_joins_text_parts() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Most likely"},
                        {"text": "tritanopia"}
                    ]
                }
            }]
        }"#;

        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        let text = GeminiGenerator::extract_text(resp).unwrap();
        assert_eq!(text, "Most likely\ntritanopia");
    }

    #[test]
    fn test_no_candidates_is_empty_payload() {
        let resp: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(matches!(
            GeminiGenerator::extract_text(resp),
            Err(Error::EmptyPayload)
        ));

        let resp: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            GeminiGenerator::extract_text(resp),
            Err(Error::EmptyPayload)
        ));
    }

    #[test]
    fn test_no_text_parts_is_empty_payload() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": ""}
                    ]
                }
            }]
        }"#;

        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            GeminiGenerator::extract_text(resp),
            Err(Error::EmptyPayload)
        ));
    }

    #[test]
    fn test_truncate_utf8_respects_char_boundaries() {
        // A multi-byte character straddling the cap must not split the slice.
        let mut body = "a".repeat(499);
        body.push('é');
        body.push_str(" trailing");
        let truncated = truncate_utf8(&body, 500);
        assert_eq!(truncated.len(), 499);
        assert!(truncated.chars().all(|c| c == 'a'));

        assert_eq!(truncate_utf8("short", 500), "short");
        assert_eq!(truncate_utf8("héllo", 2), "h");
        assert_eq!(truncate_utf8("héllo", 3), "hé");
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let config = Config::default();
        assert!(matches!(
            GeminiGenerator::from_config(&config),
            Err(Error::Config(_))
        ));

        let mut config = Config::default();
        config.gemini.api_key = "test-key".to_string();
        let generator = GeminiGenerator::from_config(&config).unwrap();
        assert_eq!(generator.api_base, GEMINI_API_BASE);
    }
}

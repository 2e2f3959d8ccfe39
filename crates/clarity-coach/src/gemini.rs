//! Gemini `generateContent` client.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use clarity_config::{ConfigError, GeminiConfig};

use crate::error::CoachError;
use crate::http::ensure_success;
use crate::provider::CompletionProvider;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// HTTP client for one Gemini model.
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client from the `[gemini]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::Config`] without an API key, or
    /// [`CoachError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &GeminiConfig) -> Result<Self, CoachError> {
        if !config.is_configured() {
            return Err(ConfigError::MissingApiKey.into());
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("clarity/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint(config),
            api_key: config.api_key.trim().to_string(),
        })
    }

    /// Full `generateContent` URL this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, prompt: &str) -> Result<String, CoachError> {
        let body = request_body(prompt);
        let resp = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let bytes = resp.bytes().await?;
        let parsed: GenerateResponse = serde_json::from_slice(&bytes)
            .map_err(|e| CoachError::Parse(format!("generateContent response: {e}")))?;
        candidate_text(parsed)
    }
}

fn endpoint(config: &GeminiConfig) -> String {
    format!(
        "{}/models/{}:generateContent",
        config.base_url.trim_end_matches('/'),
        config.model
    )
}

fn request_body(prompt: &str) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: [Content {
            role: "user",
            parts: [RequestPart { text: prompt }],
        }],
    }
}

/// Concatenate the text parts of the first candidate.
fn candidate_text(response: GenerateResponse) -> Result<String, CoachError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(CoachError::EmptyCompletion);
    };
    if let Some(reason) = &candidate.finish_reason {
        if reason != "STOP" {
            tracing::warn!(finish_reason = %reason, "completion did not finish normally");
        }
    }
    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();
    if text.trim().is_empty() {
        return Err(CoachError::EmptyCompletion);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "candidates": [
            {
                "content": {
                    "parts": [
                        {"text": "TITLE: Hello\n"},
                        {"text": "INSIGHT: World"}
                    ],
                    "role": "model"
                },
                "finishReason": "STOP",
                "index": 0
            }
        ],
        "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 5}
    }"#;

    fn configured() -> GeminiConfig {
        GeminiConfig {
            api_key: "test-key".into(),
            base_url: "https://example.test/v1beta/".into(),
            ..Default::default()
        }
    }

    #[test]
    fn parses_and_joins_parts() {
        let parsed: GenerateResponse = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(candidate_text(parsed).unwrap(), "TITLE: Hello\nINSIGHT: World");
    }

    #[test]
    fn no_candidates_is_empty_completion() {
        let parsed: GenerateResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert!(matches!(candidate_text(parsed), Err(CoachError::EmptyCompletion)));
    }

    #[test]
    fn candidate_without_text_is_empty_completion() {
        let parsed: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}, "finishReason": "MAX_TOKENS"}]}"#,
        )
        .unwrap();
        assert!(matches!(candidate_text(parsed), Err(CoachError::EmptyCompletion)));
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(request_body("hi")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"contents": [{"role": "user", "parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn endpoint_joins_base_and_model() {
        let client = GeminiClient::new(&configured()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-2.0-flash:generateContent"
        );
        assert_eq!(client.name(), "gemini");
    }

    #[test]
    fn missing_key_is_not_configured() {
        let err = GeminiClient::new(&GeminiConfig::default()).err().unwrap();
        assert!(matches!(err, CoachError::Config(ConfigError::MissingApiKey)));
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
    }
}

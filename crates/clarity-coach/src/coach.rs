//! The coach: answers in, parsed insight out.

use std::sync::Arc;

use clarity_config::GeminiConfig;
use clarity_core::entities::{QuestionnaireAnswers, StructuredInsight};

use crate::error::CoachError;
use crate::extract::parse_completion;
use crate::gemini::GeminiClient;
use crate::prompt::build_prompt;
use crate::provider::CompletionProvider;
use crate::retry::{RetryConfig, with_retry};

/// Orchestrates prompt building, the provider call with retries, and parsing.
///
/// Cheap to clone; the provider is shared.
#[derive(Clone)]
pub struct Coach {
    provider: Arc<dyn CompletionProvider>,
    retry: RetryConfig,
}

impl Coach {
    #[must_use]
    pub fn new(provider: Arc<dyn CompletionProvider>, retry: RetryConfig) -> Self {
        Self { provider, retry }
    }

    /// Build a Gemini-backed coach from config.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::Config`] without an API key.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, CoachError> {
        let client = GeminiClient::new(config)?;
        tracing::debug!(endpoint = client.endpoint(), "gemini client ready");
        Ok(Self::new(Arc::new(client), RetryConfig::from(config)))
    }

    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Generate advice for a complete answer set, optionally steered by the
    /// user's adjustments.
    ///
    /// # Errors
    ///
    /// - [`CoachError::InvalidAnswers`] if the answers are incomplete.
    /// - Provider errors once retries are exhausted.
    /// - [`CoachError::StructuralMismatch`] if the completion is broken.
    pub async fn advise(
        &self,
        answers: &QuestionnaireAnswers,
        adjustments: Option<&str>,
    ) -> Result<StructuredInsight, CoachError> {
        answers
            .validate_complete()
            .map_err(|e| CoachError::InvalidAnswers(e.user_message()))?;

        let prompt = build_prompt(answers, adjustments);
        let provider = self.provider.name();
        tracing::debug!(provider, prompt_len = prompt.len(), "requesting completion");

        let raw = with_retry(&self.retry, provider, || self.provider.complete(&prompt)).await?;
        tracing::debug!(provider, completion_len = raw.len(), "completion received");

        parse_completion(&raw).inspect_err(|error| {
            tracing::warn!(provider, %error, "completion rejected by sanitizer");
        })
    }
}

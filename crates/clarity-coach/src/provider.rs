use async_trait::async_trait;

use crate::error::CoachError;

/// A text-completion backend. One prompt in, one raw completion out.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short identifier used in logs (e.g., `"gemini"`).
    fn name(&self) -> &str;

    /// Send `prompt` and return the model's raw text.
    async fn complete(&self, prompt: &str) -> Result<String, CoachError>;
}

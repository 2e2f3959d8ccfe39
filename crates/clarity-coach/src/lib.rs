//! # clarity-coach
//!
//! Turns questionnaire answers into a [`StructuredInsight`] via an LLM:
//!
//! 1. [`prompt::build_prompt`] renders answers (and optional adjustments)
//!    into a prompt that demands a nine-label response format.
//! 2. A [`CompletionProvider`] (production: [`GeminiClient`]) returns raw
//!    text; transient failures are retried with backoff.
//! 3. [`sanitize::sanitize`] repairs markdown artifacts and rejects
//!    structurally broken completions.
//! 4. [`extract::extract`] walks the labels once and fills every field,
//!    leaving missing ones empty.
//!
//! [`Coach`] wires the steps together.
//!
//! [`StructuredInsight`]: clarity_core::entities::StructuredInsight

mod coach;
mod error;
pub mod extract;
mod gemini;
mod http;
pub mod labels;
pub mod prompt;
mod provider;
pub mod retry;
pub mod sanitize;

pub use coach::Coach;
pub use error::CoachError;
pub use extract::parse_completion;
pub use gemini::GeminiClient;
pub use provider::CompletionProvider;
pub use retry::RetryConfig;

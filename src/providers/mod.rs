mod open_ai;
mod prompt;

pub use open_ai::{OpenAIProvider, OPENAI_MODEL};
pub use prompt::{build_prompt, RECIPE_PROMPT_TEMPLATE};

use crate::error::BackendError;
use async_trait::async_trait;

/// A text-completion backend
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Send a single prompt and return the text of the first completion choice
    async fn complete(&self, prompt: &str) -> Result<String, BackendError>;
}

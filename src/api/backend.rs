//! The generation backend port and its bridge to the `llm` crate.

use async_trait::async_trait;
use llm::chat::ChatMessage;
use llm::LLMProvider;

use super::error::GenerationError;

/// Port to the external generation backend: one rendered prompt in, one
/// text reply out. The real implementation is [`LlmBackend`]; tests
/// substitute deterministic doubles.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Bridge from the port to any provider built by the `llm` crate.
pub struct LlmBackend {
    provider: Box<dyn LLMProvider>,
}

impl LlmBackend {
    pub fn new(provider: Box<dyn LLMProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl GenerationBackend for LlmBackend {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let messages = vec![ChatMessage::user().content(prompt).build()];
        let response = self.provider.chat(&messages).await?;
        Ok(response.text().unwrap_or_default())
    }
}

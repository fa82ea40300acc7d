pub mod openai;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("OPENAI_API_KEY not set in environment variables.")]
    MissingApiKey,

    #[error("failed to call text generation API: {0}")]
    Request(#[from] reqwest::Error),

    #[error("text generation API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("missing content in text generation response")]
    MissingContent,
}

/// Turns a fully assembled prompt into generated prose.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}

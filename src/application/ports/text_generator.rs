use async_trait::async_trait;

/// Turns an instruction template plus source content into one generated
/// document. The returned string is opaque formatted text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        instructions: &str,
        content: &str,
    ) -> Result<String, GenerationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("generation service returned an empty response")]
    EmptyResponse,
}

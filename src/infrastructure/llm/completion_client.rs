use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationError, TextGenerator};

/// Text generation over an OpenAI-compatible `/chat/completions` endpoint.
/// One request per document; the instruction template rides as the system
/// message and the transcript as the user message.
pub struct ChatCompletionClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl ChatCompletionClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
            timeout,
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[async_trait]
impl TextGenerator for ChatCompletionClient {
    async fn generate(
        &self,
        instructions: &str,
        content: &str,
    ) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: instructions,
                },
                ChatMessage {
                    role: "user",
                    content,
                },
            ],
        };

        tracing::debug!(model = %self.model, content_chars = content.len(), "requesting generation");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| GenerationError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GenerationError::ApiRequestFailed(format!(
                "status {status}: {body}"
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(format!("parse response: {e}")))?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        tracing::info!(chars = text.len(), "generation completed");

        Ok(text)
    }
}

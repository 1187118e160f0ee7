use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{RecognitionError, SpeechToText};

/// Speech recognition over an OpenAI-compatible `/audio/transcriptions`
/// endpoint. The whole clip goes out as one multipart request; the response
/// is the plain transcript text.
pub struct WhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl WhisperEngine {
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

#[async_trait]
impl SpeechToText for WhisperEngine {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, RecognitionError> {
        let url = format!(
            "{}/audio/transcriptions",
            self.base_url.trim_end_matches('/')
        );

        let file_part = multipart::Part::bytes(audio_data.to_vec())
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| RecognitionError::ApiRequestFailed(format!("mime: {e}")))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(model = %self.model, bytes = audio_data.len(), "submitting audio for recognition");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| RecognitionError::ApiRequestFailed(format!("request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognitionError::ApiRequestFailed(format!(
                "status {status}: {body}"
            )));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| RecognitionError::ApiRequestFailed(format!("body: {e}")))?;
        let transcript = transcript.trim().to_string();

        // Silence and unintelligible clips come back as empty text.
        if transcript.is_empty() {
            return Err(RecognitionError::EmptyTranscript);
        }

        tracing::info!(chars = transcript.len(), "recognition completed");

        Ok(transcript)
    }
}

use async_trait::async_trait;

/// Recognizes speech in a complete audio track, submitted as one unit.
/// No chunking, no streaming, no partial results.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, RecognitionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("audio could not be understood: transcript was empty")]
    EmptyTranscript,
}

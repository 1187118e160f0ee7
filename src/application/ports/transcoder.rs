use async_trait::async_trait;

/// Extracts a mono 16kHz 16-bit PCM audio track from a video container.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn extract_audio(
        &self,
        media: &[u8],
        extension: &str,
    ) -> Result<Vec<u8>, TranscodeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscodeError {
    #[error("transcoder unavailable: {0}")]
    Unavailable(String),
    #[error("transcode failed: {0}")]
    Failed(String),
    #[error("transcode timed out after {0}s")]
    TimedOut(u64),
    #[error("transcoder produced no audio track")]
    MissingOutput,
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

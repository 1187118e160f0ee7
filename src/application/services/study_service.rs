use std::sync::Arc;

use crate::application::ports::{
    GenerationError, RecognitionError, SpeechToText, TextGenerator, TranscodeError, Transcoder,
};
use crate::application::services::prompts;
use crate::domain::{MediaKind, StudySet, Upload};

/// Runs the whole pipeline for one upload: normalize, transcribe, then
/// synthesize notes and quiz from the same transcript.
///
/// Stages are strictly ordered except the two syntheses, which share the
/// transcript and run concurrently. A failure in any stage aborts the rest
/// of the request; no partial result is returned.
pub struct StudyService<T, S, G>
where
    T: Transcoder,
    S: SpeechToText,
    G: TextGenerator,
{
    transcoder: Arc<T>,
    speech_to_text: Arc<S>,
    text_generator: Arc<G>,
}

impl<T, S, G> StudyService<T, S, G>
where
    T: Transcoder,
    S: SpeechToText,
    G: TextGenerator,
{
    pub fn new(transcoder: Arc<T>, speech_to_text: Arc<S>, text_generator: Arc<G>) -> Self {
        Self {
            transcoder,
            speech_to_text,
            text_generator,
        }
    }

    pub async fn run(&self, upload: Upload) -> Result<StudySet, PipelineError> {
        let upload_id = upload.id;
        let audio = self.normalize(upload).await?;

        let transcript = self.speech_to_text.transcribe(&audio).await?;
        tracing::info!(
            upload_id = %upload_id.as_uuid(),
            chars = transcript.len(),
            "transcription completed"
        );

        let (notes, quiz) = tokio::join!(
            self.text_generator
                .generate(prompts::NOTES_INSTRUCTIONS, &transcript),
            self.text_generator
                .generate(prompts::QUIZ_INSTRUCTIONS, &transcript),
        );
        let notes = notes?;
        let quiz = quiz?;

        tracing::info!(
            upload_id = %upload_id.as_uuid(),
            notes_chars = notes.len(),
            quiz_chars = quiz.len(),
            "study set generated"
        );

        Ok(StudySet {
            transcript,
            notes,
            quiz,
        })
    }

    /// Audio uploads are the identity on bytes; video goes through the
    /// external transcoder.
    async fn normalize(&self, upload: Upload) -> Result<Vec<u8>, PipelineError> {
        match upload.kind {
            MediaKind::Audio => Ok(upload.data),
            MediaKind::Video => {
                tracing::debug!(
                    upload_id = %upload.id.as_uuid(),
                    filename = %upload.filename,
                    "extracting audio from video"
                );
                let audio = self
                    .transcoder
                    .extract_audio(&upload.data, &upload.extension)
                    .await?;
                Ok(audio)
            }
        }
    }
}

/// Tagged composition of the per-stage failures, plus a catch-all for
/// faults outside the three collaborator calls.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("transcode: {0}")]
    Transcode(#[from] TranscodeError),
    #[error("recognition: {0}")]
    Recognition(#[from] RecognitionError),
    #[error("generation: {0}")]
    Generation(#[from] GenerationError),
    #[error("unexpected: {0}")]
    Unexpected(String),
}

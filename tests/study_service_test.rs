use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use lectern::application::ports::{
    GenerationError, RecognitionError, SpeechToText, TextGenerator, TranscodeError, Transcoder,
};
use lectern::application::services::{PipelineError, StudyService, prompts};
use lectern::domain::Upload;

const TRANSCODED_AUDIO: &[u8] = b"mono 16khz pcm";

struct RecordingTranscoder {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Transcoder for RecordingTranscoder {
    async fn extract_audio(
        &self,
        _media: &[u8],
        _extension: &str,
    ) -> Result<Vec<u8>, TranscodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(TRANSCODED_AUDIO.to_vec())
    }
}

struct FailingTranscoder;

#[async_trait]
impl Transcoder for FailingTranscoder {
    async fn extract_audio(
        &self,
        _media: &[u8],
        _extension: &str,
    ) -> Result<Vec<u8>, TranscodeError> {
        Err(TranscodeError::Unavailable("ffmpeg not found".to_string()))
    }
}

struct RecordingSpeechToText {
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<Vec<u8>>>>,
}

#[async_trait]
impl SpeechToText for RecordingSpeechToText {
    async fn transcribe(&self, audio_data: &[u8]) -> Result<String, RecognitionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(audio_data.to_vec());
        Ok("a deterministic transcript".to_string())
    }
}

struct FailingSpeechToText;

#[async_trait]
impl SpeechToText for FailingSpeechToText {
    async fn transcribe(&self, _audio_data: &[u8]) -> Result<String, RecognitionError> {
        Err(RecognitionError::ApiRequestFailed(
            "connection refused".to_string(),
        ))
    }
}

/// Deterministic function of exactly (instructions, content), so tests can
/// check that each synthesis depends on nothing else.
struct EchoingTextGenerator {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl TextGenerator for EchoingTextGenerator {
    async fn generate(
        &self,
        instructions: &str,
        content: &str,
    ) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("[{}]::[{}]", instructions.len(), content))
    }
}

struct FailingTextGenerator;

#[async_trait]
impl TextGenerator for FailingTextGenerator {
    async fn generate(
        &self,
        _instructions: &str,
        _content: &str,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::ApiRequestFailed(
            "status 401 Unauthorized: missing credential".to_string(),
        ))
    }
}

fn audio_upload(data: &[u8]) -> Upload {
    Upload::new("lecture.mp3".to_string(), data.to_vec()).unwrap()
}

fn video_upload(data: &[u8]) -> Upload {
    Upload::new("lecture.mp4".to_string(), data.to_vec()).unwrap()
}

#[tokio::test]
async fn given_audio_upload_when_normalizing_then_bytes_reach_recognition_unchanged() {
    let transcoder_calls = Arc::new(AtomicUsize::new(0));
    let speech_calls = Arc::new(AtomicUsize::new(0));
    let received = Arc::new(Mutex::new(Vec::new()));
    let generator_calls = Arc::new(AtomicUsize::new(0));

    let service = StudyService::new(
        Arc::new(RecordingTranscoder {
            calls: Arc::clone(&transcoder_calls),
        }),
        Arc::new(RecordingSpeechToText {
            calls: Arc::clone(&speech_calls),
            received: Arc::clone(&received),
        }),
        Arc::new(EchoingTextGenerator {
            calls: Arc::clone(&generator_calls),
        }),
    );

    let data = b"original mp3 bytes";
    let result = service.run(audio_upload(data)).await.unwrap();

    assert_eq!(transcoder_calls.load(Ordering::SeqCst), 0);
    assert_eq!(received.lock().unwrap().as_slice(), &[data.to_vec()]);
    assert_eq!(result.transcript, "a deterministic transcript");
}

#[tokio::test]
async fn given_video_upload_when_normalizing_then_recognition_sees_transcoded_audio() {
    let transcoder_calls = Arc::new(AtomicUsize::new(0));
    let received = Arc::new(Mutex::new(Vec::new()));

    let service = StudyService::new(
        Arc::new(RecordingTranscoder {
            calls: Arc::clone(&transcoder_calls),
        }),
        Arc::new(RecordingSpeechToText {
            calls: Arc::new(AtomicUsize::new(0)),
            received: Arc::clone(&received),
        }),
        Arc::new(EchoingTextGenerator {
            calls: Arc::new(AtomicUsize::new(0)),
        }),
    );

    service.run(video_upload(b"mp4 container")).await.unwrap();

    assert_eq!(transcoder_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        received.lock().unwrap().as_slice(),
        &[TRANSCODED_AUDIO.to_vec()]
    );
}

#[tokio::test]
async fn given_fixed_transcript_when_synthesizing_then_notes_and_quiz_are_independent() {
    let service = StudyService::new(
        Arc::new(RecordingTranscoder {
            calls: Arc::new(AtomicUsize::new(0)),
        }),
        Arc::new(RecordingSpeechToText {
            calls: Arc::new(AtomicUsize::new(0)),
            received: Arc::new(Mutex::new(Vec::new())),
        }),
        Arc::new(EchoingTextGenerator {
            calls: Arc::new(AtomicUsize::new(0)),
        }),
    );

    let first = service.run(audio_upload(b"clip")).await.unwrap();
    let second = service.run(audio_upload(b"clip")).await.unwrap();

    // Each document is a pure function of its own template and the transcript.
    let expected_notes = format!(
        "[{}]::[{}]",
        prompts::NOTES_INSTRUCTIONS.len(),
        first.transcript
    );
    let expected_quiz = format!(
        "[{}]::[{}]",
        prompts::QUIZ_INSTRUCTIONS.len(),
        first.transcript
    );
    assert_eq!(first.notes, expected_notes);
    assert_eq!(first.quiz, expected_quiz);
    assert_ne!(first.notes, first.quiz);

    // Re-running against deterministic collaborators reproduces the set.
    assert_eq!(first, second);
}

#[tokio::test]
async fn given_recognition_failure_when_running_then_synthesis_is_never_reached() {
    let generator_calls = Arc::new(AtomicUsize::new(0));

    let service = StudyService::new(
        Arc::new(RecordingTranscoder {
            calls: Arc::new(AtomicUsize::new(0)),
        }),
        Arc::new(FailingSpeechToText),
        Arc::new(EchoingTextGenerator {
            calls: Arc::clone(&generator_calls),
        }),
    );

    let result = service.run(audio_upload(b"clip")).await;

    assert!(matches!(result, Err(PipelineError::Recognition(_))));
    assert_eq!(generator_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_transcode_failure_when_running_then_recognition_is_never_reached() {
    let speech_calls = Arc::new(AtomicUsize::new(0));

    let service = StudyService::new(
        Arc::new(FailingTranscoder),
        Arc::new(RecordingSpeechToText {
            calls: Arc::clone(&speech_calls),
            received: Arc::new(Mutex::new(Vec::new())),
        }),
        Arc::new(EchoingTextGenerator {
            calls: Arc::new(AtomicUsize::new(0)),
        }),
    );

    let result = service.run(video_upload(b"mp4 container")).await;

    assert!(matches!(result, Err(PipelineError::Transcode(_))));
    assert_eq!(speech_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_missing_credential_when_generating_then_whole_request_fails_after_recognition() {
    let speech_calls = Arc::new(AtomicUsize::new(0));

    let service = StudyService::new(
        Arc::new(RecordingTranscoder {
            calls: Arc::new(AtomicUsize::new(0)),
        }),
        Arc::new(RecordingSpeechToText {
            calls: Arc::clone(&speech_calls),
            received: Arc::new(Mutex::new(Vec::new())),
        }),
        Arc::new(FailingTextGenerator),
    );

    let result = service.run(audio_upload(b"clip")).await;

    // Recognition succeeded independently; the failure is generation's alone.
    assert_eq!(speech_calls.load(Ordering::SeqCst), 1);
    match result {
        Err(PipelineError::Generation(GenerationError::ApiRequestFailed(msg))) => {
            assert!(msg.contains("401"));
        }
        other => panic!("expected generation failure, got {other:?}"),
    }
}

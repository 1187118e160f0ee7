mod speech_to_text;
mod text_generator;
mod transcoder;

pub use speech_to_text::{RecognitionError, SpeechToText};
pub use text_generator::{GenerationError, TextGenerator};
pub use transcoder::{TranscodeError, Transcoder};

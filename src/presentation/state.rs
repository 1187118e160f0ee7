use std::sync::Arc;

use crate::application::ports::{SpeechToText, TextGenerator, Transcoder};
use crate::application::services::StudyService;
use crate::presentation::config::Settings;

pub struct AppState<T, S, G>
where
    T: Transcoder,
    S: SpeechToText,
    G: TextGenerator,
{
    pub study_service: Arc<StudyService<T, S, G>>,
    pub settings: Settings,
}

impl<T, S, G> Clone for AppState<T, S, G>
where
    T: Transcoder,
    S: SpeechToText,
    G: TextGenerator,
{
    fn clone(&self) -> Self {
        Self {
            study_service: Arc::clone(&self.study_service),
            settings: self.settings.clone(),
        }
    }
}

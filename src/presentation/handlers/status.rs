use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{SpeechToText, TextGenerator, Transcoder};
use crate::presentation::config::Settings;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub environment: String,
    pub transcription_model: String,
    pub generation_model: String,
    pub credential_configured: bool,
}

/// Deployment-facing counterpart of the reference UI's sidebar: which
/// models are wired up, and whether a credential is present at all.
pub async fn status_handler<T, S, G>(State(state): State<AppState<T, S, G>>) -> impl IntoResponse
where
    T: Transcoder + 'static,
    S: SpeechToText + 'static,
    G: TextGenerator + 'static,
{
    (
        StatusCode::OK,
        Json(StatusResponse {
            environment: Settings::environment().to_string(),
            transcription_model: state.settings.transcription.model.clone(),
            generation_model: state.settings.generation.model.clone(),
            credential_configured: state.settings.credential_configured(),
        }),
    )
}

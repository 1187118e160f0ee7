use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use lectern::application::services::StudyService;
use lectern::infrastructure::llm::ChatCompletionClient;
use lectern::infrastructure::media::FfmpegTranscoder;
use lectern::infrastructure::observability::{TracingConfig, init_tracing};
use lectern::infrastructure::speech::WhisperEngine;
use lectern::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    if !settings.credential_configured() {
        tracing::warn!("LECTERN_API_KEY is not set; recognition and generation calls will fail");
    }

    let transcoder = Arc::new(FfmpegTranscoder::new(
        settings.transcoder.binary.clone(),
        Duration::from_secs(settings.transcoder.timeout_secs),
    ));
    let speech_to_text = Arc::new(WhisperEngine::new(
        settings.transcription.api_key.clone(),
        settings.transcription.base_url.clone(),
        settings.transcription.model.clone(),
        Duration::from_secs(settings.transcription.timeout_secs),
    ));
    let text_generator = Arc::new(ChatCompletionClient::new(
        settings.generation.api_key.clone(),
        settings.generation.base_url.clone(),
        settings.generation.model.clone(),
        Duration::from_secs(settings.generation.timeout_secs),
    ));

    let study_service = Arc::new(StudyService::new(
        transcoder,
        speech_to_text,
        text_generator,
    ));

    let state = AppState {
        study_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr = (settings.server.host.as_str(), settings.server.port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}

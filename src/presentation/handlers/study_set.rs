use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{SpeechToText, TextGenerator, Transcoder};
use crate::application::services::PipelineError;
use crate::domain::{MediaKind, Upload};
use crate::presentation::render::bullets_to_list;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct StudySetResponse {
    pub transcript: String,
    pub notes: String,
    pub quiz: String,
    pub notes_display: String,
    pub quiz_display: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts one uploaded media file and runs the full pipeline. The request
/// either yields a complete study set or one error message; a failed stage
/// never surfaces partial results.
#[tracing::instrument(skip(state, multipart))]
pub async fn create_study_set_handler<T, S, G>(
    State(state): State<AppState<T, S, G>>,
    mut multipart: Multipart,
) -> impl IntoResponse
where
    T: Transcoder + 'static,
    S: SpeechToText + 'static,
    G: TextGenerator + 'static,
{
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Study set request with no file");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "No file uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = match field.file_name() {
        Some(name) => name.to_string(),
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Uploaded field has no filename".to_string(),
                }),
            )
                .into_response();
        }
    };

    if MediaKind::from_filename(&filename).is_none() {
        tracing::warn!(filename = %filename, "Unsupported media extension");
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(ErrorResponse {
                error: format!(
                    "Unsupported file type: {} (expected mp3, wav, mp4, mkv, or mov)",
                    filename
                ),
            }),
        )
            .into_response();
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read upload bytes");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: PipelineError::Unexpected(format!("failed to read upload: {e}"))
                        .to_string(),
                }),
            )
                .into_response();
        }
    };

    let Some(upload) = Upload::new(filename.clone(), data.to_vec()) else {
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(ErrorResponse {
                error: format!("Unsupported file type: {}", filename),
            }),
        )
            .into_response();
    };

    tracing::info!(
        upload_id = %upload.id.as_uuid(),
        filename = %upload.filename,
        bytes = upload.data.len(),
        "Processing media upload"
    );

    match state.study_service.run(upload).await {
        Ok(set) => {
            let notes_display = bullets_to_list(&set.notes);
            let quiz_display = bullets_to_list(&set.quiz);
            (
                StatusCode::OK,
                Json(StudySetResponse {
                    transcript: set.transcript,
                    notes: set.notes,
                    quiz: set.quiz,
                    notes_display,
                    quiz_display,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Pipeline failed");
            let status = match &e {
                PipelineError::Transcode(_)
                | PipelineError::Recognition(_)
                | PipelineError::Generation(_) => StatusCode::BAD_GATEWAY,
                PipelineError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

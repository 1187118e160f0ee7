use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::ArtifactKind;

#[derive(Deserialize)]
pub struct ArtifactRequest {
    pub kind: String,
    pub content: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Serves client-held notes or quiz text back as a plain-text attachment.
/// The body is echoed byte for byte; display markup never touches it.
#[tracing::instrument(skip(request))]
pub async fn download_artifact_handler(Json(request): Json<ArtifactRequest>) -> impl IntoResponse {
    let Some(kind) = ArtifactKind::from_name(&request.kind) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Unknown artifact kind: {}", request.kind),
            }),
        )
            .into_response();
    };

    (
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", kind.filename()),
            ),
        ],
        request.content,
    )
        .into_response()
}

use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{TranscodeError, Transcoder};

use super::workspace::MediaWorkspace;

/// Audio extraction via an external ffmpeg process.
///
/// The input bytes are staged into a request-scoped workspace, ffmpeg writes
/// a mono 16kHz 16-bit PCM wav next to them, and the result is read back
/// into memory. The workspace is deleted on every exit path.
pub struct FfmpegTranscoder {
    binary: String,
    timeout: Duration,
}

impl FfmpegTranscoder {
    pub fn new(binary: impl Into<String>, timeout: Duration) -> Self {
        Self {
            binary: binary.into(),
            timeout,
        }
    }

    fn command_args(input: &Path, output: &Path) -> Vec<OsString> {
        vec![
            "-i".into(),
            input.as_os_str().to_os_string(),
            "-vn".into(),
            "-ac".into(),
            "1".into(),
            "-ar".into(),
            "16000".into(),
            "-acodec".into(),
            "pcm_s16le".into(),
            "-y".into(),
            output.as_os_str().to_os_string(),
        ]
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn extract_audio(
        &self,
        media: &[u8],
        extension: &str,
    ) -> Result<Vec<u8>, TranscodeError> {
        let workspace = MediaWorkspace::create()?;
        let input = workspace.path_for(&format!("input.{extension}"));
        let output = workspace.path_for("audio.wav");

        tokio::fs::write(&input, media).await?;

        let mut command = Command::new(&self.binary);
        command
            .args(Self::command_args(&input, &output))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!(binary = %self.binary, input = %input.display(), "running ffmpeg");

        let result = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| TranscodeError::TimedOut(self.timeout.as_secs()))?
            .map_err(|e| TranscodeError::Unavailable(format!("failed to run ffmpeg: {e}")))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            let detail = stderr.lines().last().unwrap_or("no output").to_string();
            return Err(TranscodeError::Failed(format!(
                "ffmpeg exited with {}: {detail}",
                result.status
            )));
        }

        let audio = tokio::fs::read(&output)
            .await
            .map_err(|_| TranscodeError::MissingOutput)?;
        if audio.is_empty() {
            return Err(TranscodeError::MissingOutput);
        }

        tracing::debug!(bytes = audio.len(), "audio track extracted");

        Ok(audio)
    }
}

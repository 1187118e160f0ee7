mod ffmpeg_transcoder;
mod workspace;

pub use ffmpeg_transcoder::FfmpegTranscoder;
pub use workspace::MediaWorkspace;

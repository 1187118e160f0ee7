use serde::Deserialize;

use super::Environment;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-1";
const DEFAULT_GENERATION_MODEL: &str = "gpt-4o-mini";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
const DEFAULT_FFMPEG_TIMEOUT_SECS: u64 = 300;

/// All runtime configuration, resolved once at startup and passed to the
/// adapters explicitly. Components never read the environment themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcoder: TranscoderSettings,
    pub transcription: TranscriptionSettings,
    pub generation: GenerationSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscoderSettings {
    pub binary: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Settings {
    /// One credential (`LECTERN_API_KEY`) and one base URL serve both
    /// external services; models and timeouts are tunable independently.
    pub fn from_env() -> Self {
        let api_key = env_or("LECTERN_API_KEY", "");
        let base_url = env_or("LECTERN_BASE_URL", DEFAULT_BASE_URL);
        let request_timeout = env_parse("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse("SERVER_PORT", 3000),
            },
            transcoder: TranscoderSettings {
                binary: env_or("FFMPEG_BIN", "ffmpeg"),
                timeout_secs: env_parse("FFMPEG_TIMEOUT_SECS", DEFAULT_FFMPEG_TIMEOUT_SECS),
            },
            transcription: TranscriptionSettings {
                api_key: api_key.clone(),
                base_url: base_url.clone(),
                model: env_or("TRANSCRIPTION_MODEL", DEFAULT_TRANSCRIPTION_MODEL),
                timeout_secs: request_timeout,
            },
            generation: GenerationSettings {
                api_key,
                base_url,
                model: env_or("GENERATION_MODEL", DEFAULT_GENERATION_MODEL),
                timeout_secs: request_timeout,
            },
        }
    }

    pub fn environment() -> Environment {
        std::env::var("APP_ENV")
            .ok()
            .and_then(|v| Environment::try_from(v).ok())
            .unwrap_or(Environment::Local)
    }

    pub fn credential_configured(&self) -> bool {
        !self.generation.api_key.is_empty()
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

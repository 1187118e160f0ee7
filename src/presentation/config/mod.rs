mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    GenerationSettings, ServerSettings, Settings, TranscoderSettings, TranscriptionSettings,
};

use uuid::Uuid;

/// What an uploaded file is, judged by its declared extension.
///
/// The extension check is the only branching in the pipeline: audio passes
/// through untouched, video goes through the transcoder first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "mp3" | "wav" => Some(Self::Audio),
            "mp4" | "mkv" | "mov" => Some(Self::Video),
            _ => None,
        }
    }

    pub fn from_filename(filename: &str) -> Option<Self> {
        filename
            .rsplit_once('.')
            .and_then(|(_, ext)| Self::from_extension(ext))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadId(Uuid);

impl UploadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UploadId {
    fn default() -> Self {
        Self::new()
    }
}

/// One uploaded media file, request-local.
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub id: UploadId,
    pub filename: String,
    pub extension: String,
    pub kind: MediaKind,
    pub data: Vec<u8>,
}

impl Upload {
    pub fn new(filename: String, data: Vec<u8>) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        let kind = MediaKind::from_extension(extension)?;
        let extension = extension.to_ascii_lowercase();
        Some(Self {
            id: UploadId::new(),
            filename,
            extension,
            kind,
            data,
        })
    }
}

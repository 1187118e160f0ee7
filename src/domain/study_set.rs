/// The pipeline's product: one transcript and the two documents derived
/// from it. Held in memory for the duration of a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct StudySet {
    pub transcript: String,
    pub notes: String,
    pub quiz: String,
}

/// Which downloadable document a client is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Notes,
    Quiz,
}

impl ArtifactKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "notes" => Some(Self::Notes),
            "quiz" => Some(Self::Quiz),
            _ => None,
        }
    }

    pub fn filename(&self) -> &'static str {
        match self {
            Self::Notes => "notes.txt",
            Self::Quiz => "quiz.txt",
        }
    }
}

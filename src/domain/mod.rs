mod media;
mod study_set;

pub use media::{MediaKind, Upload, UploadId};
pub use study_set::{ArtifactKind, StudySet};

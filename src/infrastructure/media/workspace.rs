use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A uniquely named scratch directory for one transcode. The directory and
/// everything in it are removed when the workspace drops, on success and
/// failure alike.
pub struct MediaWorkspace {
    dir: TempDir,
}

impl MediaWorkspace {
    pub fn create() -> io::Result<Self> {
        let dir = TempDir::with_prefix("lectern-")?;
        Ok(Self { dir })
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

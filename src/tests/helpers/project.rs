/// On-disk test project builder
///
/// Writes Java sources and properties files below a unique temp directory;
/// the directory is removed when the project is dropped.
use super::tempdir::unique_temp_dir;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new(test_name: &str) -> Self {
        Self {
            dir: unique_temp_dir(test_name),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `relative`, creating parent directories
    pub fn file(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        self
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

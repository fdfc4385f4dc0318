use crate::artifacts::reference::resolution::Resolution;
use std::path::Path;

/// The project's working copy on disk.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads a file relative to the project root (absolute paths are read as-is).
    pub async fn read_file(&self, file_path: &Path) -> Resolution {
        let file_path = self.path.join(file_path);

        Resolution::read_file(&file_path).await
    }
}

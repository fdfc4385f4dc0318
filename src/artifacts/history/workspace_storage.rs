use serde::Deserialize;
use std::path::PathBuf;
use url::Url;

/// `workspace.json` as written by the editor into each workspace storage entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceMetadata {
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub folders: Vec<WorkspaceFolder>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceFolder {
    pub uri: Option<String>,
}

impl WorkspaceMetadata {
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// The single folder for folder workspaces, the first folder otherwise.
    pub fn folder_uri(&self) -> Option<&str> {
        self.folder
            .as_deref()
            .or_else(|| self.folders.first().and_then(|folder| folder.uri.as_deref()))
    }

    /// Local filesystem path of the workspace folder. Remote workspaces
    /// (non-`file` schemes) have none.
    pub fn folder_path(&self) -> Option<PathBuf> {
        let uri = self.folder_uri()?;
        let url = Url::parse(uri).ok()?;
        if url.scheme() != "file" {
            return None;
        }
        url.to_file_path().ok()
    }
}

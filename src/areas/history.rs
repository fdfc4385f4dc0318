use crate::artifacts::config::ChronosConfig;
use crate::artifacts::core::absolute_root;
use crate::artifacts::history::INDEX_FILE;
use crate::artifacts::history::discovery::{FsProbe, discover};
use crate::artifacts::history::snapshot::HistoryIndex;
use crate::artifacts::reference::resolution::{Absence, Resolution};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The snapshot history of one project: its index and snapshot files.
#[derive(Debug)]
pub struct HistoryStore {
    project_root: Box<Path>,
    config: ChronosConfig,
}

impl HistoryStore {
    pub fn new(project_root: Box<Path>, config: ChronosConfig) -> Self {
        HistoryStore {
            project_root,
            config,
        }
    }

    /// Runs the discovery chain off the async runtime.
    pub async fn locate(&self) -> Option<PathBuf> {
        let project_root = self.project_root.to_path_buf();
        let config = self.config.clone();

        match tokio::task::spawn_blocking(move || discover(&project_root, &config, &FsProbe)).await
        {
            Ok(found) => found.map(|discovered| discovered.directory),
            Err(e) => {
                warn!(error = %e, "history discovery task failed");
                None
            }
        }
    }

    /// Loads the history index. A missing directory or index file is an empty
    /// history; an index that is not valid JSON is an error.
    pub async fn load_index(&self) -> anyhow::Result<HistoryIndex> {
        let Some(directory) = self.locate().await else {
            return Ok(HistoryIndex::default());
        };

        let index_path = directory.join(INDEX_FILE);
        let content = match tokio::fs::read_to_string(&index_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %index_path.display(), "history directory has no index");
                return Ok(HistoryIndex::default());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("failed to read history index {}", index_path.display())
                });
            }
        };

        let index: HistoryIndex = serde_json::from_str(&content).with_context(|| {
            format!("failed to parse history index {}", index_path.display())
        })?;

        debug!(snapshots = index.len(), path = %index_path.display(), "loaded history index");

        Ok(index)
    }

    /// Reads snapshot content by storage name; absolute storage paths are read as-is.
    pub async fn read_snapshot(&self, storage_path: &str) -> Resolution {
        let storage_path = Path::new(storage_path);
        if storage_path.is_absolute() {
            return Resolution::read_file(storage_path).await;
        }

        match self.locate().await {
            Some(directory) => Resolution::read_file(&directory.join(storage_path)).await,
            None => Resolution::NotFound(Absence::NoHistoryDirectory),
        }
    }
}

/// Loads the history index of `project_root` with configuration read from its
/// environment and editor settings.
pub async fn load_index(project_root: &Path) -> anyhow::Result<HistoryIndex> {
    let config = ChronosConfig::load(project_root);
    HistoryStore::new(absolute_root(project_root).into(), config)
        .load_index()
        .await
}

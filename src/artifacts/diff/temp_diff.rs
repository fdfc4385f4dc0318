use crate::areas::git::Git;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tempfile::TempPath;
use tracing::{debug, warn};

const TEMP_SUFFIX: &str = ".txt";

/// Produces a textual patch between two in-memory blobs.
///
/// Both blobs are written to temporary files which are removed again when
/// their [`TempPath`] guards drop, whatever the outcome of the diff.
#[derive(Debug)]
pub struct TempDiffRunner<'g> {
    git: &'g Git,
    temp_dir: PathBuf,
}

impl<'g> TempDiffRunner<'g> {
    pub fn new(git: &'g Git, temp_dir: PathBuf) -> Self {
        TempDiffRunner { git, temp_dir }
    }

    /// Patch text, or `""` when the contents are equal or the tool could not run.
    pub async fn diff_text(&self, original: &str, modified: &str) -> String {
        match self.try_diff_text(original, modified).await {
            Ok(patch) => {
                debug!(len = patch.len(), "diff finished");
                patch
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "diff failed, returning an empty patch");
                String::new()
            }
        }
    }

    async fn try_diff_text(&self, original: &str, modified: &str) -> anyhow::Result<String> {
        // git runs inside the temp dir, so the file paths handed to it must not be relative
        let temp_dir = std::path::absolute(&self.temp_dir)
            .with_context(|| format!("invalid temp dir: {}", self.temp_dir.display()))?;

        let stamp = chrono::Utc::now().timestamp_millis();
        let file_a = write_temp(&temp_dir, &format!("chronos_a_{stamp}_"), original).await?;
        let file_b = write_temp(&temp_dir, &format!("chronos_b_{stamp}_"), modified).await?;

        self.git.diff_no_index(&file_a, &file_b, &temp_dir).await
    }
}

async fn write_temp(temp_dir: &Path, prefix: &str, content: &str) -> anyhow::Result<TempPath> {
    let path = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(temp_dir)
        .with_context(|| format!("failed to create temp file in {}", temp_dir.display()))?
        .into_temp_path();

    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("failed to write temp file {}", path.display()))?;

    Ok(path)
}

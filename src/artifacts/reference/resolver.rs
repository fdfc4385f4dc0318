use crate::areas::git::Git;
use crate::areas::history::HistoryStore;
use crate::areas::workspace::Workspace;
use crate::artifacts::reference::resolution::{Absence, Resolution};
use crate::artifacts::reference::version_reference::{ReferenceKind, VersionReference};
use derive_new::new;
use tracing::{debug, warn};

/// Maps a [`VersionReference`] to text.
///
/// Resolution never fails: every problem is reported as
/// [`Resolution::NotFound`] so a comparison can always show both sides.
#[derive(Debug, Clone, Copy, new)]
pub struct Resolver<'r> {
    workspace: &'r Workspace,
    git: &'r Git,
    history: &'r HistoryStore,
}

impl<'r> Resolver<'r> {
    pub async fn resolve(&self, reference: &VersionReference) -> Resolution {
        let resolution = match reference.kind(self.workspace.path()) {
            ReferenceKind::Empty => Resolution::NotFound(Absence::EmptyPath),
            ReferenceKind::AtRevision { revision, path } => {
                self.resolve_at_revision(revision, path).await
            }
            ReferenceKind::Absolute(path) => Resolution::read_file(&path).await,
            ReferenceKind::Snapshot { storage_name, path } => {
                match self.history.read_snapshot(&storage_name).await {
                    Resolution::NotFound(absence) => {
                        // a `.history/...` path may still be an ordinary project file
                        debug!(%absence, "snapshot not found, reading as project file");
                        self.workspace.read_file(&path).await
                    }
                    found => found,
                }
            }
            ReferenceKind::ProjectRelative(path) => self.workspace.read_file(&path).await,
        };

        match &resolution {
            Resolution::Found(content) => {
                debug!(reference = %reference, len = content.len(), "resolved reference")
            }
            Resolution::NotFound(absence) => {
                debug!(reference = %reference, %absence, "reference not found")
            }
        }

        resolution
    }

    async fn resolve_at_revision(&self, revision: String, path: String) -> Resolution {
        match self.git.show(&revision, &path).await {
            Ok(Some(bytes)) => Resolution::from_bytes(bytes),
            Ok(None) => Resolution::NotFound(Absence::NotAtRevision { revision, path }),
            Err(e) => {
                warn!(error = %e, "could not run git show");
                Resolution::NotFound(Absence::NotAtRevision { revision, path })
            }
        }
    }
}

use crate::artifacts::core::{relative_to, to_slash_path};
use crate::artifacts::history::HISTORY_MARKER;
use crate::artifacts::history::snapshot::SnapshotRecord;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One side of a comparison: a path plus an optional revision.
///
/// - no revision: the file on disk (absolute, project-relative, or a
///   `.history/<storage name>` snapshot reference)
/// - a revision: the file as committed at that revision
/// - an empty revision: the file as staged in the Git index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, new)]
pub struct VersionReference {
    pub path: String,
    #[serde(default)]
    pub revision: Option<String>,
}

/// How a reference is resolved. Exactly one kind applies to any reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceKind {
    Empty,
    AtRevision { revision: String, path: String },
    Absolute(PathBuf),
    Snapshot { storage_name: String, path: PathBuf },
    ProjectRelative(PathBuf),
}

impl VersionReference {
    pub fn working(path: impl Into<String>) -> Self {
        VersionReference::new(path.into(), None)
    }

    pub fn at_revision(path: impl Into<String>, revision: impl Into<String>) -> Self {
        VersionReference::new(path.into(), Some(revision.into()))
    }

    /// The index stage of `path`.
    pub fn staged(path: impl Into<String>) -> Self {
        VersionReference::new(path.into(), Some(String::new()))
    }

    pub fn snapshot(record: &SnapshotRecord) -> Self {
        let storage_name = record.storage_name();
        if Path::new(storage_name).is_absolute() {
            VersionReference::working(storage_name)
        } else {
            VersionReference::working(format!("{HISTORY_MARKER}{storage_name}"))
        }
    }

    pub fn kind(&self, project_root: &Path) -> ReferenceKind {
        if self.path.is_empty() {
            return ReferenceKind::Empty;
        }

        if let Some(revision) = &self.revision {
            let relative = relative_to(Path::new(&self.path), project_root);
            return ReferenceKind::AtRevision {
                revision: revision.clone(),
                path: to_slash_path(&relative.to_string_lossy()),
            };
        }

        let path = Path::new(&self.path);
        if path.is_absolute() {
            return ReferenceKind::Absolute(path.to_path_buf());
        }

        let slash_path = to_slash_path(&self.path);
        match slash_path.strip_prefix(HISTORY_MARKER) {
            Some(storage_name) if !storage_name.is_empty() => ReferenceKind::Snapshot {
                storage_name: storage_name.to_string(),
                path: PathBuf::from(&slash_path),
            },
            _ => ReferenceKind::ProjectRelative(PathBuf::from(slash_path)),
        }
    }
}

impl std::fmt::Display for VersionReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.revision.as_deref() {
            None => write!(f, "{}", self.path),
            Some("") => write!(f, ":{} (index)", self.path),
            Some(revision) => write!(f, "{}:{}", revision, self.path),
        }
    }
}

use crate::artifacts::config::ChronosConfig;
use crate::artifacts::core::normalize_for_match;
use crate::artifacts::history::workspace_storage::WorkspaceMetadata;
use crate::artifacts::history::{EXTENSION_STORAGE_FOLDER, HISTORY_FOLDER, INDEX_FILE};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

const WORKSPACE_METADATA_FILE: &str = "workspace.json";

/// Read-only view of the filesystem used by the discovery strategies.
///
/// Strategies never touch `std::fs` directly so that the precedence rules can
/// be exercised against an in-memory layout.
pub trait StorageProbe {
    fn is_file(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn read_to_string(&self, path: &Path) -> Option<String>;
    /// Immediate subdirectories of `path`, in name order.
    fn list_dirs(&self, path: &Path) -> Vec<PathBuf>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl StorageProbe for FsProbe {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> Option<String> {
        std::fs::read_to_string(path).ok()
    }

    fn list_dirs(&self, path: &Path) -> Vec<PathBuf> {
        WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_dir())
            .map(|entry| entry.into_path())
            .collect()
    }
}

pub type LocateFn = fn(&Path, &ChronosConfig, &dyn StorageProbe) -> Option<PathBuf>;

#[derive(Clone, Copy)]
pub struct DiscoveryStrategy {
    pub name: &'static str,
    pub locate: LocateFn,
}

impl std::fmt::Debug for DiscoveryStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryStrategy")
            .field("name", &self.name)
            .finish()
    }
}

/// Strategies in precedence order; the first one that finds a directory wins.
pub const DISCOVERY_CHAIN: [DiscoveryStrategy; 3] = [
    DiscoveryStrategy {
        name: "project-folder",
        locate: project_folder,
    },
    DiscoveryStrategy {
        name: "workspace-storage",
        locate: workspace_storage,
    },
    DiscoveryStrategy {
        name: "project-folder-fallback",
        locate: project_folder_fallback,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discovered {
    pub strategy: &'static str,
    pub directory: PathBuf,
}

pub fn discover(
    project_root: &Path,
    config: &ChronosConfig,
    probe: &dyn StorageProbe,
) -> Option<Discovered> {
    let found = DISCOVERY_CHAIN.iter().find_map(|strategy| {
        (strategy.locate)(project_root, config, probe).map(|directory| Discovered {
            strategy: strategy.name,
            directory,
        })
    });

    match &found {
        Some(discovered) => debug!(
            strategy = discovered.strategy,
            directory = %discovered.directory.display(),
            "found history directory"
        ),
        None => debug!(project = %project_root.display(), "no history directory found"),
    }

    found
}

fn local_history(project_root: &Path, probe: &dyn StorageProbe) -> Option<PathBuf> {
    let directory = project_root.join(HISTORY_FOLDER);
    probe
        .is_file(&directory.join(INDEX_FILE))
        .then_some(directory)
}

pub fn project_folder(
    project_root: &Path,
    config: &ChronosConfig,
    probe: &dyn StorageProbe,
) -> Option<PathBuf> {
    if !config.save_in_project_folder {
        return None;
    }
    local_history(project_root, probe)
}

pub fn workspace_storage(
    project_root: &Path,
    config: &ChronosConfig,
    probe: &dyn StorageProbe,
) -> Option<PathBuf> {
    if !probe.is_dir(&config.workspace_storage_dir) {
        return None;
    }

    let wanted = normalize_for_match(project_root);

    probe
        .list_dirs(&config.workspace_storage_dir)
        .into_iter()
        .find_map(|entry| {
            let content = probe.read_to_string(&entry.join(WORKSPACE_METADATA_FILE))?;
            let folder = WorkspaceMetadata::parse(&content).ok()?.folder_path()?;
            if normalize_for_match(&folder) != wanted {
                return None;
            }

            let storage = entry.join(EXTENSION_STORAGE_FOLDER);
            probe.is_dir(&storage).then_some(storage)
        })
}

/// The project folder, tried again when the setting did not ask for it.
pub fn project_folder_fallback(
    project_root: &Path,
    config: &ChronosConfig,
    probe: &dyn StorageProbe,
) -> Option<PathBuf> {
    if config.save_in_project_folder {
        return None;
    }
    local_history(project_root, probe)
}

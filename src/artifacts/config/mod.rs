//! Configuration
//!
//! Everything a comparison or history lookup depends on is collected into a
//! single [`ChronosConfig`] that is built once and handed to the repository.
//! Editor settings are read from disk here and nowhere else.

pub mod settings;

use crate::artifacts::config::settings::EditorSettings;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const WORKSPACE_STORAGE_ENV: &str = "CHRONOS_WORKSPACE_STORAGE";
pub const GLOBAL_SETTINGS_ENV: &str = "CHRONOS_GLOBAL_SETTINGS";
pub const GIT_PROGRAM_ENV: &str = "CHRONOS_GIT";
pub const TEMP_DIR_ENV: &str = "CHRONOS_TMPDIR";

const DEFAULT_GIT_PROGRAM: &str = "git";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChronosConfig {
    /// Prefer the project-local `.history` folder over editor workspace storage.
    pub save_in_project_folder: bool,
    /// Directory holding one subdirectory per editor workspace.
    pub workspace_storage_dir: PathBuf,
    /// Global editor `settings.json`.
    pub global_settings_path: PathBuf,
    pub git_program: String,
    /// Where the diff runner places its temporary files.
    pub temp_dir: PathBuf,
}

impl Default for ChronosConfig {
    fn default() -> Self {
        let editor_user_dir = dirs::config_dir()
            .unwrap_or_default()
            .join("Code")
            .join("User");

        ChronosConfig {
            save_in_project_folder: false,
            workspace_storage_dir: editor_user_dir.join("workspaceStorage"),
            global_settings_path: editor_user_dir.join("settings.json"),
            git_program: DEFAULT_GIT_PROGRAM.to_string(),
            temp_dir: std::env::temp_dir(),
        }
    }
}

impl ChronosConfig {
    /// Builds the configuration for `project_root`: defaults, then environment
    /// overrides, then the `saveInProjectFolder` editor setting.
    pub fn load(project_root: &Path) -> Self {
        let mut config = Self::default().with_env_overrides();

        let settings = EditorSettings::load(&[
            project_root.join(".vscode").join("settings.json"),
            config.global_settings_path.clone(),
        ]);
        config.save_in_project_folder = settings.save_in_project_folder().unwrap_or(false);

        debug!(
            save_in_project_folder = config.save_in_project_folder,
            workspace_storage = %config.workspace_storage_dir.display(),
            "loaded configuration"
        );

        config
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Some(dir) = std::env::var_os(WORKSPACE_STORAGE_ENV) {
            self.workspace_storage_dir = PathBuf::from(dir);
        }
        if let Some(path) = std::env::var_os(GLOBAL_SETTINGS_ENV) {
            self.global_settings_path = PathBuf::from(path);
        }
        if let Ok(program) = std::env::var(GIT_PROGRAM_ENV) {
            self.git_program = program;
        }
        if let Some(dir) = std::env::var_os(TEMP_DIR_ENV) {
            self.temp_dir = PathBuf::from(dir);
        }
        self
    }
}

use crate::areas::git::Git;
use crate::areas::history::HistoryStore;
use crate::areas::workspace::Workspace;
use crate::artifacts::config::ChronosConfig;
use crate::artifacts::core::absolute_root;
use crate::artifacts::diff::comparison::Comparator;
use crate::artifacts::diff::temp_diff::TempDiffRunner;
use crate::artifacts::reference::resolver::Resolver;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// A tracked project: its working copy, its Git history and its snapshot
/// history, plus the writer commands print to.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    config: ChronosConfig,
    git: Git,
    workspace: Workspace,
    history: HistoryStore,
}

impl Repository {
    /// Opens `path` with configuration loaded from the environment and the
    /// editor settings.
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = std::path::absolute(path)
            .with_context(|| format!("invalid project path: {path}"))?;
        let config = ChronosConfig::load(&path);

        Ok(Self::with_config(&path, config, writer))
    }

    /// Relative roots are made absolute against the current directory.
    pub fn with_config(
        path: &Path,
        config: ChronosConfig,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        let path: Box<Path> = absolute_root(path).into();

        Repository {
            git: Git::new(config.git_program.clone(), path.clone()),
            workspace: Workspace::new(path.clone()),
            history: HistoryStore::new(path.clone(), config.clone()),
            writer: RefCell::new(writer),
            config,
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn git(&self) -> &Git {
        &self.git
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn history_store(&self) -> &HistoryStore {
        &self.history
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.workspace, &self.git, &self.history)
    }

    pub fn diff_runner(&self) -> TempDiffRunner<'_> {
        TempDiffRunner::new(&self.git, self.config.temp_dir.clone())
    }

    pub fn comparator(&self) -> Comparator<'_> {
        Comparator::new(self.resolver(), self.diff_runner(), &self.git)
    }
}

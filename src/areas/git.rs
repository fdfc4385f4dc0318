use crate::artifacts::branch::BranchEntry;
use crate::artifacts::log::{CommitEntry, LogQuery};
use crate::artifacts::status::StatusEntry;
use anyhow::Context;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Output, Stdio};
use tokio::process::Command;
use tracing::debug;

/// Keeps diff output a plain unified patch whatever the user's Git config says.
const PLAIN_DIFF_FLAGS: [&str; 3] = ["--color=never", "--no-ext-diff", "--no-textconv"];

/// The Git command-line tool, run as a subprocess inside the project root.
#[derive(Debug)]
pub struct Git {
    program: String,
    work_dir: Box<Path>,
}

impl Git {
    pub fn new(program: String, work_dir: Box<Path>) -> Self {
        Git { program, work_dir }
    }

    async fn output<I, S>(&self, cwd: &Path, args: I) -> anyhow::Result<Output>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        debug!(?command, "running git");

        command
            .output()
            .await
            .with_context(|| format!("failed to run '{}' in {}", self.program, cwd.display()))
    }

    /// Runs git in the project root; a non-zero exit is an error carrying git's stderr.
    async fn run<I, S>(&self, args: I) -> anyhow::Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = self.output(&self.work_dir, args).await?;

        if !output.status.success() {
            anyhow::bail!(
                "git exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Raw content of `path` at `revision` (`""` for the index stage), or
    /// `None` when git cannot produce it.
    pub async fn show(&self, revision: &str, path: &str) -> anyhow::Result<Option<Vec<u8>>> {
        let object = format!("{revision}:{path}");
        let output = self.output(&self.work_dir, ["show", object.as_str()]).await?;

        if output.status.success() {
            Ok(Some(output.stdout))
        } else {
            debug!(
                %object,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "git show found nothing"
            );
            Ok(None)
        }
    }

    /// Patch between two arbitrary files. Exit status 1 means "differences
    /// found" and still carries the patch; anything but 0 or 1 is a failure.
    pub async fn diff_no_index(&self, a: &Path, b: &Path, cwd: &Path) -> anyhow::Result<String> {
        let mut args = vec![OsStr::new("diff"), OsStr::new("--no-index")];
        args.extend(PLAIN_DIFF_FLAGS.map(OsStr::new));
        args.extend([a.as_os_str(), b.as_os_str()]);
        let output = self.output(cwd, args).await?;

        match output.status.code() {
            Some(0) | Some(1) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
            _ => anyhow::bail!(
                "git diff --no-index exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        }
    }

    /// `git diff [--staged] -- <path>` against the index (or HEAD when staged).
    pub async fn diff_worktree(&self, path: &str, staged: bool) -> anyhow::Result<String> {
        let mut args = vec!["diff"];
        args.extend(PLAIN_DIFF_FLAGS);
        if staged {
            args.push("--staged");
        }
        args.extend(["--", path]);

        self.run(args).await
    }

    pub async fn log(&self, query: &LogQuery) -> anyhow::Result<Vec<CommitEntry>> {
        let stdout = self.run(query.to_args()?).await?;

        CommitEntry::parse_log(&stdout)
    }

    pub async fn status(&self) -> anyhow::Result<Vec<StatusEntry>> {
        let stdout = self.run(["status", "--porcelain"]).await?;

        Ok(StatusEntry::parse_porcelain(&stdout))
    }

    pub async fn branches(&self) -> anyhow::Result<Vec<BranchEntry>> {
        let stdout = self
            .run([
                "for-each-ref",
                "--format=%(objectname)|%(refname)|%(HEAD)",
                "refs/heads/",
                "refs/remotes/",
            ])
            .await?;

        Ok(BranchEntry::parse_for_each_ref(&stdout))
    }
}

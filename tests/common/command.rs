use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const AUTHOR_NAME: &str = "fake_user";
pub const AUTHOR_EMAIL: &str = "fake_email@email.com";

#[fixture]
pub fn project_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// A Git repository with `1.txt` ("one") and `a/2.txt` ("two") committed on `main`.
#[fixture]
pub fn git_project_dir(project_dir: TempDir) -> TempDir {
    git_init(project_dir.path());

    write_file(FileSpec::new(
        project_dir.path().join("1.txt"),
        "one\n".to_string(),
    ));
    write_file(FileSpec::new(
        project_dir.path().join("a").join("2.txt"),
        "two\n".to_string(),
    ));

    run_git_command(project_dir.path(), &["add", "."])
        .assert()
        .success();
    git_commit(project_dir.path(), "Initial commit", "2023-01-01 12:00:00 +0000")
        .assert()
        .success();

    project_dir
}

/// A Git repository where `notes.txt` grows by one line in each of three commits.
#[fixture]
pub fn git_project_with_notes(project_dir: TempDir) -> TempDir {
    git_init(project_dir.path());

    let commits = [
        ("first\n", "Add notes", "2023-01-01 12:00:00 +0000"),
        ("first\nsecond\n", "Extend notes", "2023-01-02 12:00:00 +0000"),
        ("first\nsecond\nthird\n", "Finish notes", "2023-01-03 12:00:00 +0000"),
    ];

    for (content, message, date) in commits {
        write_file(FileSpec::new(
            project_dir.path().join("notes.txt"),
            content.to_string(),
        ));
        run_git_command(project_dir.path(), &["add", "notes.txt"])
            .assert()
            .success();
        git_commit(project_dir.path(), message, date)
            .assert()
            .success();
    }

    project_dir
}

/// Runs the chronos binary in `dir` with editor state redirected to paths
/// that do not exist, so only the project itself is consulted.
pub fn run_chronos_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("chronos").expect("Failed to find chronos binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env(
        "CHRONOS_WORKSPACE_STORAGE",
        dir.join(".missing-workspace-storage"),
    );
    cmd.env(
        "CHRONOS_GLOBAL_SETTINGS",
        dir.join(".missing-global-settings.json"),
    );
    cmd.env_remove("CHRONOS_LOG");
    // TMPDIR is relative to this process, not to `dir`, so hand the binary an absolute one
    cmd.env(
        "CHRONOS_TMPDIR",
        std::path::absolute(std::env::temp_dir()).expect("Failed to resolve temp dir"),
    );
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn git_init(dir: &Path) {
    run_git_command(dir, &["init", "--quiet", "--initial-branch=main"])
        .assert()
        .success();
}

pub fn git_commit(dir: &Path, message: &str, date: &str) -> Command {
    let mut cmd = run_git_command(
        dir,
        &["-c", "commit.gpgsign=false", "commit", "--quiet", "-m", message],
    );
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", AUTHOR_NAME),
        ("GIT_AUTHOR_EMAIL", AUTHOR_EMAIL),
        ("GIT_AUTHOR_DATE", date), // %Y-%m-%d %H:%M:%S %z
        ("GIT_COMMITTER_NAME", AUTHOR_NAME),
        ("GIT_COMMITTER_EMAIL", AUTHOR_EMAIL),
        ("GIT_COMMITTER_DATE", date),
    ]);
    cmd
}

/// The full id of the commit `revision` points at.
pub fn rev_parse(dir: &Path, revision: &str) -> String {
    let output = run_git_command(dir, &["rev-parse", revision])
        .output()
        .expect("Failed to run git rev-parse");

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

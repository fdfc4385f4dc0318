use crate::common::command::{git_project_dir, run_chronos_command, run_git_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::stdout_of;
use assert_fs::TempDir;
use rstest::rstest;
use serde_json::Value;

fn modify_one(dir: &std::path::Path) {
    write_file(FileSpec::new(dir.join("1.txt"), "one\nmore\n".to_string()));
}

#[rstest]
fn show_unstaged_details(git_project_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    modify_one(git_project_dir.path());

    let assert = run_chronos_command(git_project_dir.path(), &["details", "1.txt"])
        .assert()
        .success();
    let stdout = stdout_of(&assert);

    assert!(stdout.starts_with("diff --git a/1.txt b/1.txt"), "details were:\n{stdout}");
    assert!(stdout.contains("+more"), "details were:\n{stdout}");

    run_chronos_command(git_project_dir.path(), &["details", "1.txt", "--staged"])
        .assert()
        .success()
        .stdout("");

    Ok(())
}

#[rstest]
fn show_staged_details(git_project_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    modify_one(git_project_dir.path());
    run_git_command(git_project_dir.path(), &["add", "1.txt"])
        .assert()
        .success();

    let assert = run_chronos_command(
        git_project_dir.path(),
        &["details", "1.txt", "--staged", "--json"],
    )
    .assert()
    .success();
    let report: Value = serde_json::from_slice(&assert.get_output().stdout)?;

    pretty_assertions::assert_eq!(report["original"], "one\n");
    pretty_assertions::assert_eq!(report["modified"], "one\nmore\n");
    assert!(report["patch"].as_str().unwrap_or_default().contains("+more"));

    run_chronos_command(git_project_dir.path(), &["details", "1.txt"])
        .assert()
        .success()
        .stdout("");

    Ok(())
}

#[rstest]
fn show_details_of_nested_file_as_json(
    git_project_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        git_project_dir.path().join("a").join("2.txt"),
        "TWO\n".to_string(),
    ));

    let assert = run_chronos_command(git_project_dir.path(), &["details", "a/2.txt", "--json"])
        .assert()
        .success();
    let report: Value = serde_json::from_slice(&assert.get_output().stdout)?;

    pretty_assertions::assert_eq!(report["original"], "two\n");
    pretty_assertions::assert_eq!(report["modified"], "TWO\n");

    let patch = report["patch"].as_str().unwrap_or_default();
    assert!(patch.contains("-two"));
    assert!(patch.contains("+TWO"));

    Ok(())
}

#[rstest]
fn show_details_ignores_external_diff_driver(
    git_project_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    modify_one(git_project_dir.path());

    let assert = run_chronos_command(git_project_dir.path(), &["details", "1.txt"])
        .env("GIT_EXTERNAL_DIFF", "echo external-diff-output")
        .assert()
        .success();
    let stdout = stdout_of(&assert);

    assert!(!stdout.contains("external-diff-output"), "details were:\n{stdout}");
    assert!(stdout.contains("+more"), "details were:\n{stdout}");

    Ok(())
}

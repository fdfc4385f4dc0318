use crate::common::command::{git_project_dir, rev_parse, run_chronos_command, run_git_command};
use crate::common::stdout_of;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn list_local_branches(git_project_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = git_project_dir.path();
    run_git_command(dir, &["branch", "feature/login"])
        .assert()
        .success();

    let short = rev_parse(dir, "HEAD")[..7].to_string();
    let expected_output = format!("  feature/login {short}\n* main {short}\n");

    let assert = run_chronos_command(dir, &["branches"]).assert().success();

    pretty_assertions::assert_eq!(stdout_of(&assert), expected_output);

    Ok(())
}

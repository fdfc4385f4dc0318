use crate::common::command::run_chronos_command;
use crate::common::history::history_project_dir;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn compare_with_stat_summary(
    history_project_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_chronos_command(
        history_project_dir.path(),
        &["compare", ".history/s1.txt", "a.txt", "--stat"],
    )
    .assert()
    .success()
    .stdout(predicate::str::ends_with(
        "1 hunk, 1 insertion(+), 1 deletion(-)\n",
    ));

    Ok(())
}

#[rstest]
fn compare_with_stat_as_json(
    history_project_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let assert = run_chronos_command(
        history_project_dir.path(),
        &["compare", ".history/s1.txt", "a.txt", "--stat", "--json"],
    )
    .assert()
    .success();
    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)?;

    pretty_assertions::assert_eq!(report["stats"]["linesAdded"], 1);
    pretty_assertions::assert_eq!(report["stats"]["linesDeleted"], 1);

    Ok(())
}

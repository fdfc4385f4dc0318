use crate::common::command::{git_project_dir, git_project_with_notes};
use crate::common::file::{FileSpec, list_file_names, write_file};
use crate::common::history::{history_project_dir, snapshot_record};
use assert_fs::TempDir;
use chronos::areas::repository::Repository;
use chronos::artifacts::config::ChronosConfig;
use chronos::artifacts::reference::version_reference::VersionReference;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use std::path::Path;
use url::Url;

fn hermetic_config(project: &Path, temp_dir: &Path) -> ChronosConfig {
    ChronosConfig {
        save_in_project_folder: false,
        workspace_storage_dir: project.join(".missing-workspace-storage"),
        global_settings_path: project.join(".missing-global-settings.json"),
        git_program: "git".to_string(),
        temp_dir: temp_dir.to_path_buf(),
    }
}

fn repository(project: &Path, config: ChronosConfig) -> Repository {
    Repository::with_config(project, config, Box::new(std::io::sink()))
}

#[rstest]
#[tokio::test]
async fn compare_snapshot_with_working_copy(history_project_dir: TempDir) {
    let result = chronos::compare(
        history_project_dir.path(),
        &VersionReference::working(".history/s1.txt"),
        &VersionReference::working("a.txt"),
    )
    .await;

    assert_eq!(result.original, "hello\nearth");
    assert_eq!(result.modified, "hello\nworld");
    assert!(result.patch.contains("-earth"));
    assert!(result.patch.contains("+world"));

    let stats = result.stats().unwrap();
    assert_eq!(stats.hunks.len(), 1);
    assert_eq!((stats.lines_added, stats.lines_deleted), (1, 1));
}

#[rstest]
#[tokio::test]
async fn compare_empty_reference_with_file(history_project_dir: TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let repository = repository(
        history_project_dir.path(),
        hermetic_config(history_project_dir.path(), temp_dir.path()),
    );

    let result = repository
        .comparator()
        .compare(&VersionReference::default(), &VersionReference::working("b.txt"))
        .await;

    assert_eq!(result.original, "");
    assert_eq!(result.modified, "bee");
    assert!(result.patch.contains("+bee"));
    assert_eq!(list_file_names(temp_dir.path()), Vec::<String>::new());
}

#[rstest]
#[tokio::test]
async fn compare_identical_versions_has_empty_patch(history_project_dir: TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let repository = repository(
        history_project_dir.path(),
        hermetic_config(history_project_dir.path(), temp_dir.path()),
    );
    let absolute = history_project_dir.path().join("a.txt");

    let result = repository
        .comparator()
        .compare(
            &VersionReference::working(absolute.to_string_lossy()),
            &VersionReference::working("a.txt"),
        )
        .await;

    assert!(result.is_identical());
    assert_eq!(result.patch, "");
    assert!(result.stats().unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn compare_snapshot_record_with_revision(git_project_with_notes: TempDir) {
    let dir = git_project_with_notes.path();
    std::fs::create_dir_all(dir.join(".history")).unwrap();
    std::fs::write(dir.join(".history").join("n1.txt"), "first\nsecond\nthird\nfourth\n").unwrap();
    std::fs::write(
        dir.join(".history").join("index.json"),
        r#"{"snapshots":[{"id":"n1","timestamp":1700000000000,"filePath":"notes.txt","eventType":"save","storagePath":"n1.txt"}]}"#,
    )
    .unwrap();

    let temp_dir = TempDir::new().unwrap();
    let repository = repository(dir, hermetic_config(dir, temp_dir.path()));
    let index = repository.history_store().load_index().await.unwrap();
    let record = index.snapshots_for("notes.txt").next().unwrap();

    let result = repository
        .comparator()
        .compare(
            &VersionReference::at_revision("notes.txt", "HEAD"),
            &VersionReference::snapshot(record),
        )
        .await;

    assert_eq!(result.original, "first\nsecond\nthird\n");
    assert_eq!(result.modified, "first\nsecond\nthird\nfourth\n");
    assert!(result.patch.contains("+fourth"));
}

#[rstest]
#[tokio::test]
async fn compare_without_git_keeps_both_sides(history_project_dir: TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let mut config = hermetic_config(history_project_dir.path(), temp_dir.path());
    config.git_program = "chronos-test-missing-git".to_string();
    let repository = repository(history_project_dir.path(), config);

    let result = repository
        .comparator()
        .compare(
            &VersionReference::working(".history/s2.txt"),
            &VersionReference::at_revision("a.txt", "HEAD"),
        )
        .await;

    assert_eq!(result.original, "hello\nmars");
    assert_eq!(result.modified, "");
    assert_eq!(result.patch, "");
    assert_eq!(list_file_names(temp_dir.path()), Vec::<String>::new());
}

#[rstest]
#[tokio::test]
async fn resolving_a_reference_twice_gives_the_same_content(git_project_with_notes: TempDir) {
    let dir = git_project_with_notes.path();
    write_file(FileSpec::new(dir.join("notes.txt"), "draft\n".to_string()));
    let temp_dir = TempDir::new().unwrap();
    let repository = repository(dir, hermetic_config(dir, temp_dir.path()));
    let resolver = repository.resolver();

    for reference in [
        VersionReference::working("notes.txt"),
        VersionReference::at_revision("notes.txt", "HEAD~1"),
        VersionReference::staged("notes.txt"),
        VersionReference::working("missing.txt"),
    ] {
        let first = resolver.resolve(&reference).await;
        let second = resolver.resolve(&reference).await;

        assert_eq!(first, second, "reference {reference}");
    }
}

#[rstest]
#[tokio::test]
async fn compare_revision_before_file_existed_is_all_additions(git_project_dir: TempDir) {
    let dir = git_project_dir.path();
    write_file(FileSpec::new(dir.join("new.txt"), "alpha\nbeta\n".to_string()));

    let result = chronos::compare(
        dir,
        &VersionReference::at_revision("new.txt", "HEAD"),
        &VersionReference::working("new.txt"),
    )
    .await;

    assert_eq!(result.original, "");
    assert_eq!(result.modified, "alpha\nbeta\n");

    let body = result
        .patch
        .lines()
        .skip_while(|line| !line.starts_with("@@"))
        .skip(1)
        .collect::<Vec<_>>();
    assert_eq!(body, vec!["+alpha", "+beta"]);

    let stats = result.stats().unwrap();
    assert_eq!((stats.lines_added, stats.lines_deleted), (2, 0));
}

#[rstest]
#[tokio::test]
async fn compare_revision_named_by_absolute_path_from_relative_root(git_project_dir: TempDir) {
    // TempDir paths are relative while TMPDIR points at ../playground
    let root = git_project_dir.path();
    let absolute_file = std::fs::canonicalize(root).unwrap().join("1.txt");

    let result = chronos::compare(
        root,
        &VersionReference::at_revision(absolute_file.to_string_lossy(), "HEAD"),
        &VersionReference::working("1.txt"),
    )
    .await;

    assert_eq!(result.original, "one\n");
    assert_eq!(result.modified, "one\n");
    assert_eq!(result.patch, "");
}

#[rstest]
#[tokio::test]
async fn relative_root_finds_workspace_storage_history(history_project_dir: TempDir) {
    let root = history_project_dir.path();
    let storage = TempDir::new().unwrap();
    let history = storage
        .path()
        .join("0f1e2d3c")
        .join("IldioMartins.chronos-history");
    let folder = Url::from_directory_path(std::fs::canonicalize(root).unwrap()).unwrap();

    write_file(FileSpec::new(
        storage.path().join("0f1e2d3c").join("workspace.json"),
        json!({ "folder": folder.as_str() }).to_string(),
    ));
    write_file(FileSpec::new(history.join("w1.txt"), "hello\nvenus".to_string()));
    write_file(FileSpec::new(
        history.join("index.json"),
        json!({ "snapshots": [snapshot_record("w1", 1_700_000_500_000, "a.txt", "save")] })
            .to_string(),
    ));

    let temp_dir = TempDir::new().unwrap();
    let mut config = hermetic_config(root, temp_dir.path());
    config.workspace_storage_dir = storage.path().to_path_buf();
    let repository = repository(root, config);

    let index = repository.history_store().load_index().await.unwrap();
    assert_eq!(index.len(), 1);
    let record = index.snapshots_for("a.txt").next().unwrap();
    assert_eq!(record.id, "w1");

    let result = repository
        .comparator()
        .compare(&VersionReference::snapshot(record), &VersionReference::working("a.txt"))
        .await;

    assert_eq!(result.original, "hello\nvenus");
    assert!(result.patch.contains("-venus"));
}

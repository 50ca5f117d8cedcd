#![allow(missing_docs)]

use std::error::Error;
use std::fs;

use tenggat_core::Task;
use tenggat_store::{DEFAULT_KEY, FileStore, KeyValueStore, StoreError, TaskRepository};
use time::macros::{date, datetime};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn file_store_roundtrips_and_overwrites() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = FileStore::open(dir.path().join("nested").join("data"))?;

    assert_eq!(store.get("tasks")?, None);
    store.set("tasks", "[]")?;
    store.set("tasks", "[1,2]")?;
    assert_eq!(store.get("tasks")?.as_deref(), Some("[1,2]"));

    let on_disk = fs::read_to_string(store.path_for("tasks")?)?;
    assert_eq!(on_disk, "[1,2]");

    // Only the blob remains; temp files are renamed over it.
    let entries: Vec<_> = fs::read_dir(store.dir())?.collect::<Result<_, _>>()?;
    assert_eq!(entries.len(), 1);

    store.remove("tasks")?;
    store.remove("tasks")?;
    assert_eq!(store.get("tasks")?, None);
    Ok(())
}

#[test]
fn file_store_rejects_path_like_keys() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = FileStore::open(dir.path())?;

    let err = store.set("../escape", "[]").err();
    assert!(matches!(err, Some(StoreError::InvalidKey(_))));
    assert!(!dir.path().join("..").join("escape.json").exists());
    Ok(())
}

#[test]
fn repository_survives_reopen() -> TestResult {
    let dir = tempfile::tempdir()?;
    let now = datetime!(2025-01-12 08:00 +07:00);
    let tasks = vec![
        Task::new("Kirim laporan", date!(2025 - 01 - 14), now),
        Task::new("Servis motor", date!(2025 - 01 - 20), now),
    ];

    TaskRepository::new(FileStore::open(dir.path())?).save(&tasks)?;

    let reopened = TaskRepository::new(FileStore::open(dir.path())?);
    assert_eq!(reopened.key(), DEFAULT_KEY);
    assert_eq!(reopened.load()?, tasks);
    Ok(())
}

#[test]
fn repository_reads_blobs_written_without_ids() -> TestResult {
    let dir = tempfile::tempdir()?;
    let store = FileStore::open(dir.path())?;
    store.set(
        DEFAULT_KEY,
        r#"[{"text":"Lama","completed":false,"dateTime":"2024-12-01T10:00:00.000Z","dateDue":"2024-12-24"}]"#,
    )?;

    let tasks = TaskRepository::new(&store).load()?;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].text, "Lama");
    assert_eq!(tasks[0].date_due, date!(2024 - 12 - 24));

    let rewritten = fs::read_to_string(store.path_for(DEFAULT_KEY)?)?;
    let parsed: Vec<Task> = serde_json::from_str(&rewritten)?;
    assert_eq!(parsed, tasks);
    Ok(())
}

#![allow(dead_code)]

use std::process::{Command as ProcCommand, Output};
use std::sync::Arc;

use sitewatch::repository::Repository;
use sitewatch::storage::{CollectionStore, FileStorage, SqliteStorage};
use sitewatch::types::{InspectionStatus, NewInspection, NewSite};
use tempfile::TempDir;

pub fn base_cmd(data_dir: &TempDir, backend: &str) -> ProcCommand {
    let mut command = ProcCommand::new(env!("CARGO_BIN_EXE_sitewatch"));

    command
        .env("DOTENV_PATH", data_dir.path().join("missing.env"))
        .env("RUST_LOG", "warn")
        .arg("--data-dir")
        .arg(data_dir.path())
        .arg("--backend")
        .arg(backend);

    command
}

pub fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

pub fn sqlite_store(dir: &TempDir) -> Arc<dyn CollectionStore + Send + Sync> {
    let store = SqliteStorage::new(dir.path().join("sitewatch.sqlite"));
    store.init().expect("init sqlite");
    Arc::new(store)
}

pub fn file_store(dir: &TempDir) -> Arc<dyn CollectionStore + Send + Sync> {
    Arc::new(FileStorage::new(dir.path().join("collections")))
}

/// Both durable backends, opened on fresh directories.
pub fn durable_repositories() -> Vec<(&'static str, TempDir, Repository)> {
    let sqlite_dir = TempDir::new().expect("temp dir");
    let file_dir = TempDir::new().expect("temp dir");
    let sqlite = Repository::new(sqlite_store(&sqlite_dir));
    let file = Repository::new(file_store(&file_dir));
    vec![("sqlite", sqlite_dir, sqlite), ("file", file_dir, file)]
}

pub fn site(name: &str, responsible: &str) -> NewSite {
    NewSite {
        name: name.into(),
        responsible: responsible.into(),
        start_date: "2024-01-10".into(),
        expected_end_date: "2025-06-30".into(),
        description: format!("{name} construction"),
        location: None,
        photo: None,
    }
}

pub fn inspection(status: InspectionStatus) -> NewInspection {
    NewInspection {
        date: "2024-03-01".into(),
        observations: format!("status {status}"),
        status,
        location: None,
        photo: None,
    }
}

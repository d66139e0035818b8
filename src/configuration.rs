use std::path::PathBuf;

use crate::repository::ReferencePolicy;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Backend {
    /// Single SQLite database file.
    #[default]
    Sqlite,
    /// One JSON file per collection.
    File,
}

#[derive(Clone, Debug)]
pub struct Configuration {
    pub data_dir: PathBuf,
    pub backend: Backend,
    pub log_file: Option<PathBuf>,
    pub reset: bool,
    pub reference_policy: ReferencePolicy,
}

impl Configuration {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        Self {
            data_dir: cli.data_dir.clone(),
            backend: cli.backend,
            log_file: cli.log_file.clone(),
            reset: cli.reset,
            reference_policy: if cli.allow_orphans {
                ReferencePolicy::Permissive
            } else {
                ReferencePolicy::Enforce
            },
        }
    }

    pub fn sqlite_path(&self) -> PathBuf {
        self.data_dir.join("sitewatch.sqlite")
    }

    pub fn collections_dir(&self) -> PathBuf {
        self.data_dir.join("collections")
    }
}

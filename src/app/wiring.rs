use std::sync::Arc;

use crate::configuration::{Backend, Configuration};
use crate::repository::Repository;
use crate::storage::{self, CollectionStore};
use anyhow::{Context, Result};

pub fn init_data_dir(config: &Configuration) -> Result<()> {
    std::fs::create_dir_all(&config.data_dir)?;
    Ok(())
}

pub fn init_storage(config: &Configuration) -> Result<Arc<dyn CollectionStore + Send + Sync>> {
    match config.backend {
        Backend::Sqlite => {
            let sqlite = storage::SqliteStorage::new(config.sqlite_path());
            if config.reset {
                sqlite.reset_all().context("resetting storage")?;
            }
            sqlite.init().context("initializing storage")?;
            Ok(Arc::new(sqlite))
        }
        Backend::File => {
            let files = storage::FileStorage::new(config.collections_dir());
            if config.reset {
                files.reset_all().context("resetting storage")?;
            }
            files.init().context("initializing storage")?;
            Ok(Arc::new(files))
        }
    }
}

pub fn build_repository(
    config: &Configuration,
    store: Arc<dyn CollectionStore + Send + Sync>,
) -> Repository {
    Repository::new(store).with_reference_policy(config.reference_policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::ReferencePolicy;
    use crate::types::NewSite;

    fn config(dir: &std::path::Path, backend: Backend, reset: bool) -> Configuration {
        Configuration {
            data_dir: dir.to_path_buf(),
            backend,
            log_file: None,
            reset,
            reference_policy: ReferencePolicy::Enforce,
        }
    }

    fn site() -> NewSite {
        NewSite {
            name: "Bridge".into(),
            responsible: "Alice".into(),
            start_date: String::new(),
            expected_end_date: String::new(),
            description: String::new(),
            location: None,
            photo: None,
        }
    }

    #[test]
    fn reset_clears_previous_state_for_both_backends() {
        for backend in [Backend::Sqlite, Backend::File] {
            let dir = tempfile::tempdir().unwrap();

            let cfg = config(dir.path(), backend, false);
            init_data_dir(&cfg).unwrap();
            let repo = build_repository(&cfg, init_storage(&cfg).unwrap());
            repo.create_site(&site()).unwrap();

            let again = build_repository(&cfg, init_storage(&cfg).unwrap());
            assert_eq!(again.list_sites().unwrap().len(), 1, "{backend:?}");

            let cfg = config(dir.path(), backend, true);
            let fresh = build_repository(&cfg, init_storage(&cfg).unwrap());
            assert!(fresh.list_sites().unwrap().is_empty(), "{backend:?}");
        }
    }
}

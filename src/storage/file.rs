use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use super::{
    traits::{check_format_version, validate_collection_name},
    CollectionStore, Record, StorageError, COLLECTION_FORMAT_VERSION,
};

#[derive(Deserialize)]
struct Envelope {
    version: i64,
    records: Vec<Record>,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: i64,
    records: &'a [Record],
}

/// Stores every collection as `<dir>/<name>.json`. Writes go to a temp file
/// in the same directory and are renamed into place.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }

    pub fn reset_all(&self) -> Result<(), StorageError> {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::unavailable(
                format!("removing {}", self.dir.display()),
                e,
            )),
        }
    }

    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|err| {
            StorageError::unavailable(format!("creating {}", self.dir.display()), err)
        })
    }

    fn persist(&self, path: &Path, records: &[Record]) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        let envelope = EnvelopeRef {
            version: COLLECTION_FORMAT_VERSION,
            records,
        };
        serde_json::to_writer(&mut tmp, &envelope)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|err| err.error)?;
        sync_dir(&self.dir)
    }
}

/// Makes a completed rename durable by syncing the directory entry.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

impl CollectionStore for FileStorage {
    fn read_all(&self, collection: &str) -> Result<Vec<Record>, StorageError> {
        validate_collection_name(collection)?;
        let path = self.collection_path(collection);
        let context = || format!("reading {}", path.display());

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::unavailable(context(), e)),
        };
        let envelope: Envelope = serde_json::from_slice(&bytes)
            .map_err(|err| StorageError::unavailable(context(), err))?;
        check_format_version(collection, envelope.version)?;
        Ok(envelope.records)
    }

    fn write_all(&self, collection: &str, records: &[Record]) -> Result<(), StorageError> {
        validate_collection_name(collection)?;
        let path = self.collection_path(collection);
        self.persist(&path, records)
            .map_err(|err| StorageError::unavailable(format!("writing {}", path.display()), err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_storage_read_returns_empty_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::new(dir.path().join("collections"));
        assert!(store.read_all("sites").unwrap().is_empty());
    }

    #[test]
    fn file_storage_write_creates_directory_and_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::new(dir.path().join("collections"));
        store
            .write_all("sites", &[json!({"id": "a"}), json!({"id": "b"})])
            .unwrap();

        let raw = fs::read_to_string(dir.path().join("collections/sites.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            json!({"version": COLLECTION_FORMAT_VERSION, "records": [{"id": "a"}, {"id": "b"}]})
        );
        assert_eq!(
            store.read_all("sites").unwrap(),
            vec![json!({"id": "a"}), json!({"id": "b"})]
        );
    }

    #[test]
    fn file_storage_rewriting_what_was_read_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::new(dir.path());
        store.write_all("sites", &[json!({"id": "a"})]).unwrap();
        let before = fs::read(dir.path().join("sites.json")).unwrap();

        let records = store.read_all("sites").unwrap();
        store.write_all("sites", &records).unwrap();

        assert_eq!(fs::read(dir.path().join("sites.json")).unwrap(), before);
    }

    #[test]
    fn file_storage_failed_write_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::new(dir.path());
        store.write_all("sites", &[json!({"id": "a"})]).unwrap();

        // A directory squatting on the target name makes the rename fail.
        fs::create_dir(dir.path().join("inspections.json")).unwrap();
        assert!(store.write_all("inspections", &[json!({"id": "x"})]).is_err());

        assert_eq!(store.read_all("sites").unwrap(), vec![json!({"id": "a"})]);
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .filter(|n| n != "sites.json" && n != "inspections.json")
            .collect();
        assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
    }

    #[test]
    fn file_storage_corrupted_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::new(dir.path());
        fs::write(dir.path().join("sites.json"), b"[{\"id\":").unwrap();
        let err = store.read_all("sites").unwrap_err();
        assert!(err.to_string().contains("storage unavailable"));
    }

    #[test]
    fn file_storage_rejects_newer_collection_format() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::new(dir.path());
        let envelope = json!({"version": COLLECTION_FORMAT_VERSION + 1, "records": []});
        fs::write(dir.path().join("sites.json"), envelope.to_string()).unwrap();

        let err = store.read_all("sites").unwrap_err();
        assert!(err.to_string().contains("collection sites"));
    }

    #[test]
    fn file_storage_syncs_collection_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::new(dir.path().join("collections"));
        store.write_all("sites", &[json!({"id": "a"})]).unwrap();

        sync_dir(store.dir()).unwrap();
        assert_eq!(store.read_all("sites").unwrap(), vec![json!({"id": "a"})]);
    }

    #[test]
    fn file_storage_reset_all_removes_collections() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStorage::new(dir.path().join("collections"));
        store.write_all("sites", &[json!({"id": "a"})]).unwrap();
        store.reset_all().unwrap();
        assert!(!store.dir().exists());
        assert!(store.read_all("sites").unwrap().is_empty());
        store.reset_all().unwrap();
    }
}

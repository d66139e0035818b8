use std::collections::HashMap;
use std::sync::RwLock;

use super::{traits::validate_collection_name, CollectionStore, Record, StorageError};

/// Non-durable store kept in process memory. Useful for isolated test
/// instances and for embedding where persistence is handled elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    collections: RwLock<HashMap<String, Vec<Record>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollectionStore for MemoryStorage {
    fn read_all(&self, collection: &str) -> Result<Vec<Record>, StorageError> {
        validate_collection_name(collection)?;
        let guard = self
            .collections
            .read()
            .map_err(|_| {
                StorageError::unavailable(format!("reading {collection}"), "lock poisoned")
            })?;
        Ok(guard.get(collection).cloned().unwrap_or_default())
    }

    fn write_all(&self, collection: &str, records: &[Record]) -> Result<(), StorageError> {
        validate_collection_name(collection)?;
        let mut guard = self
            .collections
            .write()
            .map_err(|_| {
                StorageError::unavailable(format!("writing {collection}"), "lock poisoned")
            })?;
        guard.insert(collection.to_string(), records.to_vec());
        Ok(())
    }
}
